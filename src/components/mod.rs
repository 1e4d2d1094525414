pub mod about_page;
pub mod review_form;
pub mod review_page;
pub mod review_summary;
pub mod reviews_list;
pub mod star_rating;
