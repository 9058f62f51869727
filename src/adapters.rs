pub mod http_confirm;
