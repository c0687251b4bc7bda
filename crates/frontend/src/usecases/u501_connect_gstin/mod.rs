mod view;

pub use view::GstConnectPage;
