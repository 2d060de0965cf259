pub mod question_form;
