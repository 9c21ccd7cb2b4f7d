pub mod post_fields;
