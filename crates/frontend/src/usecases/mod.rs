pub mod u501_connect_gstin;
