pub mod static_cors;
