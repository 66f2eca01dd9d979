pub mod enums;
pub mod functions;
pub mod paths;
pub mod raw_xml;
