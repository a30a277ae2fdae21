//! Copy and colour data for every section of the page.

/// Two-stop gradient used as a card's accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

impl Accent {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn gradient(&self, angle_deg: u16) -> String {
        format!("background: linear-gradient({}deg, {}, {});", angle_deg, self.from, self.to)
    }
}

pub const BRAND: Accent = Accent::new("#3b82f6", "#9333ea");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capability {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const COMPANY: &str = "AVD INOVEX";

pub const NAV_ITEMS: &[&str] = &["Services", "AI Specialization", "Showcase", "Contact"];

/// In-page anchor for a navigation label: "AI Specialization" -> "ai-specialization".
pub fn section_anchor(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

pub const HERO_PHRASES: &[&str] = &["Websites.", "AI Apps.", "Software.", "Intelligent Solutions."];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎨",
        title: "Custom Websites",
        description: "Visually stunning, responsive websites that tell your brand's story and convert visitors into customers.",
        accent: Accent::new("#ec4899", "#f43f5e"),
    },
    Service {
        icon: "💻",
        title: "Web Applications",
        description: "Robust, scalable, and secure web applications tailored to your complex business requirements.",
        accent: Accent::new("#3b82f6", "#06b6d4"),
    },
    Service {
        icon: "📱",
        title: "Mobile Development",
        description: "Intuitive and high-performance mobile apps for iOS and Android that engage users on the go.",
        accent: Accent::new("#22c55e", "#10b981"),
    },
    Service {
        icon: "🤖",
        title: "AI Integration",
        description: "Leverage the power of Artificial Intelligence to automate processes, gain insights, and create smarter products.",
        accent: Accent::new("#a855f7", "#6366f1"),
    },
];

pub const CAPABILITIES: &[Capability] = &[
    Capability { icon: "🧠", text: "Machine Learning Models" },
    Capability { icon: "📚", text: "Natural Language Processing (NLP)" },
    Capability { icon: "⚡", text: "Data Science & Predictive Analytics" },
    Capability { icon: "✨", text: "Generative AI Solutions" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fintech AI Platform",
        category: "Web Application",
        accent: Accent::new("#2563eb", "#0891b2"),
    },
    Project {
        title: "E-commerce Recommender",
        category: "AI Integration",
        accent: Accent::new("#9333ea", "#db2777"),
    },
    Project {
        title: "SaaS Enterprise Dashboard",
        category: "Web Application",
        accent: Accent::new("#16a34a", "#0d9488"),
    },
    Project {
        title: "Healthcare Mobile App",
        category: "Mobile Development",
        accent: Accent::new("#ea580c", "#dc2626"),
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "AVD Inovex transformed our legacy system into a modern, AI-powered platform, boosting our efficiency by 200%. Their expertise is unmatched.",
        name: "John Carter",
        title: "CEO, Innovate Corp",
        avatar: "JC",
    },
    Testimonial {
        quote: "The team's dedication and communication were incredible. They delivered a world-class mobile app that our users love. Highly recommended.",
        name: "Sophia Chen",
        title: "Founder, Tech Startups",
        avatar: "SC",
    },
    Testimonial {
        quote: "Working with them was a game-changer. The final product exceeded all our expectations and their attention to detail was impeccable.",
        name: "David Lee",
        title: "CTO, Future Solutions",
        avatar: "DL",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📞",
        title: "Phone",
        value: "+1 (234) 567-890",
        href: Some("tel:+1234567890"),
    },
    ContactChannel {
        icon: "✉️",
        title: "Email",
        value: "contact@avdinovex.com",
        href: Some("mailto:contact@avdinovex.com"),
    },
    ContactChannel {
        icon: "📍",
        title: "Address",
        value: "123 Innovation Drive, Tech City, 10101",
        href: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "𝕏", label: "Twitter", href: "#" },
    SocialLink { icon: "⌥", label: "GitHub", href: "#" },
    SocialLink { icon: "in", label: "LinkedIn", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_map_to_section_ids() {
        let anchors: Vec<String> = NAV_ITEMS.iter().map(|item| section_anchor(item)).collect();
        assert_eq!(anchors, vec!["services", "ai-specialization", "showcase", "contact"]);
    }

    #[test]
    fn accent_renders_gradient() {
        let accent = Accent::new("#000", "#fff");
        assert_eq!(accent.gradient(90), "background: linear-gradient(90deg, #000, #fff);");
    }

    #[test]
    fn only_postal_address_is_unlinked() {
        let unlinked: Vec<&str> = CONTACT_CHANNELS
            .iter()
            .filter(|channel| channel.href.is_none())
            .map(|channel| channel.title)
            .collect();
        assert_eq!(unlinked, vec!["Address"]);
    }

    #[test]
    fn testimonials_have_initials() {
        for testimonial in TESTIMONIALS {
            let initials: String = testimonial
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect();
            assert_eq!(initials, testimonial.avatar);
        }
    }
}
