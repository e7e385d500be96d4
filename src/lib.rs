pub mod shared {
    pub mod core {
        pub mod record_id;
        pub mod status;
        pub mod timestamp;
        pub mod tracked_record;
    }
    pub mod application {
        pub mod record_tracker;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
    pub mod inbound {
        pub mod http;
    }
}

pub mod modules {
    pub mod messages {
        pub mod core {
            pub mod message;
        }
        pub mod use_cases {
            pub mod register_message {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_messages {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_message_status {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }

    pub mod calls {
        pub mod core {
            pub mod call;
        }
        pub mod use_cases {
            pub mod register_call {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_calls {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_call_status {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }

    pub mod solicitudes {
        pub mod core {
            pub mod partition;
        }
        pub mod use_cases {
            pub mod list_solicitudes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }

    pub mod current_user {
        pub mod core {
            pub mod current_user;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod set_current_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_current_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod slot_in_memory;
            }
        }
    }
}

pub mod shell;
