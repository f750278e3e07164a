mod commands;
mod confirmation;
mod runner;
