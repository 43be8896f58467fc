pub mod analyze_image;
pub mod analyze_text;
pub mod ocr_text;
pub mod render_report;
