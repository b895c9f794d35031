pub mod dijkstra_data;
pub mod open_set;
