pub mod review_form;
pub mod reviews_list;
pub mod reviews_section;
