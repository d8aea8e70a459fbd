pub mod cv;
pub mod profile;
pub mod project;
pub mod site;
