//! Companion services shipped with the development stack.

use super::types::ServiceDescriptor;

/// All companion services, in the order the dashboard lists them.
pub const SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        key: "adminer",
        name: "Adminer",
        port: 8081,
        description: "Database Management",
        url: "http://localhost:8081",
    },
    ServiceDescriptor {
        key: "redis-commander",
        name: "Redis Commander",
        port: 8082,
        description: "Redis Management",
        url: "http://localhost:8082",
    },
    ServiceDescriptor {
        key: "mailhog",
        name: "Mailhog",
        port: 8025,
        description: "Email Testing",
        url: "http://localhost:8025",
    },
    ServiceDescriptor {
        key: "dozzle",
        name: "Dozzle",
        port: 8888,
        description: "Docker Logs Viewer",
        url: "http://localhost:8888",
    },
    ServiceDescriptor {
        key: "rabbitmq",
        name: "RabbitMQ",
        port: 15672,
        description: "Message Queue",
        url: "http://localhost:15672",
    },
    ServiceDescriptor {
        key: "meilisearch",
        name: "Meilisearch",
        port: 7700,
        description: "Search Engine",
        url: "http://localhost:7700",
    },
];
