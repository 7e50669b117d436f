pub mod chart_path;
