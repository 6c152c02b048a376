mod config;
mod navigation;
mod session;
