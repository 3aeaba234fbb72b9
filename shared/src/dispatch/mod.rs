pub mod dispatcher;
pub mod merge;
pub mod receiver;
