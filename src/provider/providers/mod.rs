pub mod example_library;
pub mod example_list;

pub use example_library::ExampleLibraryProvider;
pub use example_list::ExampleListProvider;
