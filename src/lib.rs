pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_sink;
        pub mod key_locks;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod day_summary;
            pub mod duration;
            pub mod events;
            pub mod intents;
            pub mod punch;
            pub mod timesheet;
        }
        pub mod errors;
        pub mod use_cases {
            pub mod record_punch {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod refresh_day {
                pub mod handler;
            }
            pub mod get_timesheet_range {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod close_day {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_dispatch;
                pub mod punch_store;
                pub mod punch_store_in_memory;
                pub mod timesheet_store;
                pub mod timesheet_store_in_memory;
            }
        }
    }
}

pub mod shell;
