pub mod use_student_form;
pub mod use_student_list;
