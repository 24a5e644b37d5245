//! Built-in site content, rendered whenever the store has nothing usable.
use serde_json::Map;

use super::model::{AboutSection, ContentDocument, HeroSection, ServiceItem, StatItem};

const SERVICES: [(&str, &str); 6] = [
    (
        "Web & SaaS Development",
        "High-performance web applications built with React, Next.js, and Node.js. We focus on scalability and security.",
    ),
    (
        "Mobile Solutions",
        "Native and cross-platform apps (Flutter/React Native) that provide seamless experiences across iOS and Android.",
    ),
    (
        "AI/ML Solutions",
        "Custom machine learning models, predictive analytics, and process automation to make your business smarter.",
    ),
    (
        "UI/UX Design",
        "User-centric design systems that convert visitors into loyal customers. Wireframing to high-fidelity visuals.",
    ),
    (
        "Cloud Infrastructure",
        "AWS/Azure architecture, DevOps pipelines, and serverless implementation for maximum uptime.",
    ),
    (
        "Cybersecurity",
        "Enterprise-grade security audits, penetration testing, and compliance solutions to protect your digital assets.",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("98%", "On-Time Delivery"),
    ("50+", "Projects Launched"),
    ("3 Years", "Avg. Retention"),
    ("24/7", "Support Available"),
];

impl ContentDocument {
    /// The fully populated default document.
    pub fn builtin() -> Self {
        Self {
            hero: HeroSection {
                badge: "Innovation Studio".to_string(),
                headline_part1: "We engineer digital".to_string(),
                headline_highlight: "masterpieces.".to_string(),
                subheadline: "Makebetter Technologies transforms ambitious ideas into scalable, \
                    high-performance software. From enterprise platforms to mobile apps, \
                    we build what's next."
                    .to_string(),
                cta_primary: "Book Consultation".to_string(),
                cta_secondary: "View Services".to_string(),
            },
            about: AboutSection {
                badge: "Who We Are".to_string(),
                headline: "Building the Future, One Line at a Time.".to_string(),
                description: "DBE, Founded in 2025, Makebetter Technologies started with a simple \
                    mission: to bridge the gap between complex enterprise requirements and \
                    intuitive user experiences.\n\nWe are a team of dreamers, engineers, and \
                    designers obsessed with quality. We don't just build software; we build \
                    digital assets that compound in value over time."
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            },
            services: SERVICES
                .iter()
                .map(|(title, description)| ServiceItem {
                    title: (*title).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
            stats: STATS
                .iter()
                .map(|(value, label)| StatItem {
                    value: (*value).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
            contact_email: "deep@makebetter.tech".to_string(),
            contact_phone: "+91 98721 80369".to_string(),
            extra: Map::new(),
        }
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::builtin()
    }
}
