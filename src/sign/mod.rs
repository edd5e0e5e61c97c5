pub mod hmac;
