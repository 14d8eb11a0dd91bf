mod client;
mod sessions;
mod three_ds;
