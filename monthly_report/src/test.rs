pub mod canned_http;
