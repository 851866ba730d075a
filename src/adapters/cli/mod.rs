mod mapper;


pub(crate) use mapper::{job_to_request_command, to_load_command, to_request_command};
