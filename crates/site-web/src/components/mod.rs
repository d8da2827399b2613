pub mod route_head;
