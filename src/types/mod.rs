mod file;

pub use file::FileRow;
