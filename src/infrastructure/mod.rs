pub mod http_matcher;
