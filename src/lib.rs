pub mod shared {
    pub mod infrastructure {
        pub mod record_slot;
    }
}

pub mod modules {
    pub mod analytics {
        pub mod core {
            pub mod aggregate;
            pub mod mutation;
        }
        pub mod application {
            pub mod tracking_handler;
        }
        pub mod use_cases {
            pub mod get_analytics {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_visitor {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_pageview {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_click {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reset_analytics {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod aggregate_store;
            }
        }
    }
}

pub mod shell;
