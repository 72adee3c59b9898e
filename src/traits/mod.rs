pub mod tracker_transport;
