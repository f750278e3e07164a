pub mod flattened_content_type;
