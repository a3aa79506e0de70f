mod api;
mod orchestrator;
