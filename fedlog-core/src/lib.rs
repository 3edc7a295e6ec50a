pub mod cli;
pub mod conf;
pub mod logging;
pub mod report;
pub mod results;
pub mod scan;
