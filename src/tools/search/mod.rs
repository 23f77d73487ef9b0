mod google;

pub use google::GoogleSearchTool;
