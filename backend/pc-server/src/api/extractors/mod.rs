pub mod api_json;
pub mod project_id;
