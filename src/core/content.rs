//! Static copy for every section of the page.

use crate::core::reveal::SectionId;

pub const OWNER_NAME: &str = "Pratik Tamang";
pub const OWNER_SHORT_NAME: &str = "Pratik";
pub const ROLE: &str = "UI/UX Designer & Creative Thinker";
pub const TAGLINE: &str = "UI/UX Designer crafting beautiful digital experiences that solve real problems.";

pub const CONTACT_EMAIL: &str = "tamangpratik0102@gmail.com";
pub const CONTACT_PHONE: &str = "9863896222";

/// Asset file names, relative to the asset directory.
pub const CV_ASSET: &str = "pratik-tamanag-cv.pdf";
pub const PORTRAIT_ASSET: &str = "portrait.jpg";

pub struct Hero {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub pitch: &'static str,
    pub primary_cta: (&'static str, SectionId),
    pub secondary_cta: (&'static str, SectionId),
    pub scroll_hint: SectionId,
}

pub const HERO: Hero = Hero {
    greeting: "Hello, I'm",
    name: OWNER_NAME,
    role: ROLE,
    pitch: "I craft intuitive digital experiences that blend aesthetics with functionality, \
            solving complex problems with elegant design solutions.",
    primary_cta: ("View My Work", SectionId::Projects),
    secondary_cta: ("Contact Me", SectionId::Contact),
    scroll_hint: SectionId::About,
};

/// Per-child entrance delays of the hero, which animates on mount.
pub const HERO_DELAYS_MS: [u64; 7] = [0, 100, 200, 300, 400, 500, 600];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com",
    },
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com",
    },
    SocialLink {
        name: "X (Twitter)",
        url: "https://twitter.com",
    },
];

pub struct About {
    pub heading: &'static str,
    pub title: &'static str,
    pub paragraphs: [&'static str; 2],
    pub facts: [(&'static str, &'static str); 4],
    pub stats: [(&'static str, &'static str); 3],
}

pub const ABOUT: About = About {
    heading: "About Me",
    title: "UI/UX Designer & Creative Problem Solver",
    paragraphs: [
        "I'm Pratik Tamang, a passionate UI/UX designer with a keen eye for detail and a love for \
         creating beautiful, functional digital experiences. With a background in visual design and \
         user research, I specialize in crafting interfaces that are not only aesthetically pleasing \
         but also intuitive and user-friendly.",
        "My design philosophy centers around understanding user needs and business goals to create \
         solutions that bridge the gap between them. I believe that great design should be invisible, \
         allowing users to accomplish their tasks effortlessly while enjoying the journey.",
    ],
    facts: [
        ("Email", CONTACT_EMAIL),
        ("Phone", CONTACT_PHONE),
        ("Location", "Kathmandu, Nepal"),
        ("Status", "Available for freelance"),
    ],
    stats: [
        ("1+", "Years Experience"),
        ("15+", "Projects Completed"),
        ("10+", "Happy Clients"),
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub value: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILLS_INTRO: &str = "I specialize in creating user-centered designs that are both beautiful and functional. \
     My expertise spans across various design disciplines and tools.";

pub const DESIGN_SKILLS: [Skill; 4] = [
    Skill { name: "UI Design", value: 95 },
    Skill { name: "UX Research", value: 90 },
    Skill { name: "Wireframing", value: 92 },
    Skill { name: "Prototyping", value: 88 },
];

pub const TOOL_SKILLS: [Skill; 4] = [
    Skill { name: "Figma", value: 95 },
    Skill { name: "Adobe XD", value: 50 },
    Skill { name: "Canva", value: 85 },
    Skill { name: "Photoshop", value: 50 },
];

pub const SERVICES: [Service; 6] = [
    Service {
        title: "UI Design",
        description: "Creating visually stunning interfaces that engage users and enhance brand identity.",
    },
    Service {
        title: "UX Research",
        description: "Conducting user research to understand behaviors, needs, and motivations through observation and feedback.",
    },
    Service {
        title: "Wireframing",
        description: "Building structural blueprints that establish hierarchy and key functionalities.",
    },
    Service {
        title: "Prototyping",
        description: "Creating interactive models that simulate user experience and test functionality.",
    },
    Service {
        title: "Design Systems",
        description: "Developing cohesive design languages that ensure consistency across products.",
    },
    Service {
        title: "Mobile App Design",
        description: "Crafting intuitive mobile experiences with a focus on usability and engagement.",
    },
];

pub const PROJECTS_INTRO: &str = "A showcase of my recent design projects, ranging from mobile applications to web platforms. \
     Each project represents a unique challenge and solution.";

pub const CONTACT_INTRO: &str = "Have a project in mind or want to collaborate? Feel free to reach out and I'll get back \
     to you as soon as possible.";

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Email",
        value: CONTACT_EMAIL,
        link: "mailto:tamangpratik0102@gmail.com",
    },
    ContactChannel {
        title: "Phone",
        value: CONTACT_PHONE,
        link: "tel:+9779863896222",
    },
    ContactChannel {
        title: "Location",
        value: "Kathmandu",
        link: "https://maps.app.goo.gl/NYrTjjfxz4cS4Ayf7",
    },
];

pub const FOOTER_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

/// Copyright line for the footer.
pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER_NAME}. All rights reserved.")
}
