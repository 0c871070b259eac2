pub mod hash;
pub mod path;
pub mod site_list;
