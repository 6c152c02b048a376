mod cli;
mod logger;
mod navigation;
