mod caller;
mod cookie;
