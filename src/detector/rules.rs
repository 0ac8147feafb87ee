//! Built-in project type rules.
//!
//! Order matters: the most specific frameworks come first.

use crate::detector::ProjectTypeRule;

pub const LARAVEL: ProjectTypeRule = ProjectTypeRule {
    id: "laravel",
    name: "Laravel",
    icon: "laravel",
    color: "from-red-500 to-red-600",
    description: "PHP Framework for Web Artisans",
    markers: &["artisan", "bootstrap/app.php"],
    subdomain: ".localhost",
    path: "",
};

pub const SYMFONY: ProjectTypeRule = ProjectTypeRule {
    id: "symfony",
    name: "Symfony",
    icon: "symfony",
    color: "from-gray-700 to-gray-800",
    description: "High Performance PHP Framework",
    markers: &["symfony.lock", "bin/console"],
    subdomain: ".localhost",
    path: "/api",
};

pub const PRESTASHOP: ProjectTypeRule = ProjectTypeRule {
    id: "prestashop",
    name: "PrestaShop",
    icon: "prestashop",
    color: "from-blue-500 to-blue-600",
    description: "E-commerce Platform",
    markers: &["classes/PrestaShopAutoload.php", "modules"],
    subdomain: ".localhost",
    path: "",
};

pub const WORDPRESS: ProjectTypeRule = ProjectTypeRule {
    id: "wordpress",
    name: "WordPress",
    icon: "wordpress",
    color: "from-blue-400 to-blue-500",
    description: "Content Management System",
    markers: &["wp-config.php", "wp-content"],
    subdomain: ".localhost",
    path: "",
};

/// Used when no rule matches.
pub const GENERIC: ProjectTypeRule = ProjectTypeRule {
    id: "generic",
    name: "Project",
    icon: "generic",
    color: "from-gray-500 to-gray-600",
    description: "Web Application",
    markers: &[],
    subdomain: ".localhost",
    path: "",
};

/// All built-in rules, in evaluation order.
pub const PROJECT_TYPES: &[ProjectTypeRule] = &[LARAVEL, SYMFONY, PRESTASHOP, WORDPRESS];
