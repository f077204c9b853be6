pub mod gemini_service;
pub mod generation_service;
pub mod grading_service;
