pub mod add;
pub mod archive;
pub mod delete;
pub mod done;
pub mod edit;
pub mod history;
pub mod list;
pub mod seed;
pub mod tasks;
pub mod undo;
