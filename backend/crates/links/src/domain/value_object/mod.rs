pub mod link_status;
pub mod submitted_url;
pub mod tag_name;
