//! # Content Catalog
//!
//! Every fixed list the pages render: team profiles, FAQs, certificates,
//! gallery files, product lines and contact details.
//!
//! The lists are `&'static` so controllers can clone entries cheaply and the
//! wasm binary carries them as read-only data.

use crate::types::{
    Certificate, FaqEntry, ImageRef, ProductLine, ServiceTeaser, Side, SupportService, TeamMember,
};

// =============================================================================
// About Page
// =============================================================================

/// Leadership profiles, in carousel order.
pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        id: 1,
        name: "Pradeep Modi",
        position: "Director",
        image: "/images/director.jpg",
        bio: "Pradeep Modi has over 20 years of experience in the road safety industry. \
              Under his leadership, our company has expanded operations to 15 states and \
              achieved consistent year-over-year growth. He holds an MBA from Harvard \
              Business School and is passionate about implementing innovative safety \
              solutions that save lives.",
        expertise: &[
            "Strategic Planning",
            "Business Development",
            "Industry Relations",
            "Safety Standards Implementation",
        ],
        image_side: Side::Left,
    },
    TeamMember {
        id: 2,
        name: "Varsha Chauhan",
        position: "Director",
        image: "/images/director2.jpg",
        bio: "With a background in civil engineering and 15 years of experience in \
              operations management, Varsha oversees all production processes and ensures \
              our products meet the highest quality standards. She has successfully led \
              the implementation of lean manufacturing principles, reducing waste by 30% \
              while improving product quality.",
        expertise: &[
            "Operations Management",
            "Quality Control",
            "Supply Chain Optimization",
            "Process Improvement",
        ],
        image_side: Side::Left,
    },
];

/// Core values (title, description).
pub const CORE_VALUES: &[(&str, &str)] = &[
    (
        "Quality",
        "We are committed to manufacturing products of the highest quality that exceed industry standards.",
    ),
    (
        "Safety",
        "Safety is at the core of everything we do, from product design to manufacturing processes.",
    ),
    (
        "Innovation",
        "We continuously innovate to improve our products and manufacturing processes.",
    ),
    (
        "Integrity",
        "We conduct our business with honesty, transparency, and ethical practices.",
    ),
];

// =============================================================================
// Contact Page
// =============================================================================

/// Frequently asked questions, in accordion order.
pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What types of road signs do you manufacture?",
        answer: "We manufacture a comprehensive range of road signs including regulatory signs, \
                 warning signs, guide signs, informational signs, and custom signage for specific \
                 requirements. All our signs comply with national and international standards for \
                 visibility, durability, and safety.",
    },
    FaqEntry {
        question: "Do you offer installation services for your products?",
        answer: "Yes, we provide professional installation services for all our products. Our \
                 experienced team ensures proper installation according to safety standards and \
                 specifications, guaranteeing optimal performance and longevity of the products.",
    },
    FaqEntry {
        question: "What is the typical lead time for orders?",
        answer: "Lead times vary depending on the product type, quantity, and customization \
                 requirements. Standard products typically have a lead time of 1-2 weeks, while \
                 custom orders may take 2-4 weeks. For large projects, we recommend contacting us \
                 in advance to discuss timelines.",
    },
    FaqEntry {
        question: "Do you provide warranties for your products?",
        answer: "Yes, all our products come with warranties. Standard road signs have a 5-year \
                 warranty against manufacturing defects, while crash barriers and highway \
                 furniture typically have warranties ranging from 2-7 years depending on the \
                 specific product. Please contact us for detailed warranty information.",
    },
    FaqEntry {
        question: "Can you handle large-scale highway infrastructure projects?",
        answer: "Absolutely. We have extensive experience managing large-scale highway \
                 infrastructure projects. Our team can handle everything from initial \
                 consultation and design to manufacturing, installation, and maintenance, \
                 ensuring a comprehensive solution for your project needs.",
    },
];

/// Registered office address.
pub const ADDRESS: &str = "SIGNEX SAFETY SOLUTIONS LLP, Mundra Ki Badi, Meera Munch Ke Pass, \
                           Bundi Road, Delhi Gate, Chittorgarh, Rajasthan, 312001, India";

pub const PHONE_NUMBERS: &[&str] = &["+91 80589 46520", "+91 79768 95037"];

pub const EMAIL_ADDRESSES: &[&str] = &["contact@signexsafety.com", "sales@signexsafety.com"];

pub const BUSINESS_HOURS: &[&str] = &[
    "Monday - Friday: 8:00 AM - 6:00 PM",
    "Saturday: 9:00 AM - 1:00 PM",
    "Sunday: Closed",
];

// =============================================================================
// Services Page
// =============================================================================

/// Downloadable certifications, in card order.
pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "ISO 9001:2015",
        description: "Quality Management System Certification",
        file_name: "signex safety solutions llp - iso 9001-2015.pdf",
        icon: "🏆",
    },
    Certificate {
        id: 2,
        title: "ISO 14001:2015",
        description: "Environmental Management System Certification",
        file_name: "signex safety solutions llp - iso 14001-2015.pdf",
        icon: "🌿",
    },
    Certificate {
        id: 3,
        title: "ISO 45001:2018",
        description: "Occupational Health and Safety Management System",
        file_name: "signex safety solutions llp - iso 45001-2018.pdf",
        icon: "🛡️",
    },
    Certificate {
        id: 4,
        title: "Udyam Registration",
        description: "Official Business Registration Certificate",
        file_name: "Print - Udyam Registration Certificate.pdf",
        icon: "📜",
    },
];

pub const PRODUCT_LINES: &[ProductLine] = &[
    ProductLine {
        title: "Road Sign Boards",
        tagline: "Premium Quality",
        description: "Our road sign boards are manufactured using high-grade materials that \
                      ensure durability, visibility, and weather resistance. We produce a wide \
                      range of signage including regulatory signs, warning signs, guide signs, \
                      and informational signs that comply with all national and international \
                      standards.",
        features: &[
            "Reflective and non-reflective options",
            "Custom sizes and designs available",
            "Weather-resistant and UV-protected",
            "High visibility in all lighting conditions",
            "Compliant with regulatory standards",
        ],
        images: &[
            ImageRef {
                src: "/images/choose-right-way-realistic-concept_1284-5715.jpg",
                alt: "Direction road sign",
            },
            ImageRef {
                src: "/images/png-road-signs-isolated-white-background_185193-162801.jpg",
                alt: "Assorted road signs",
            },
        ],
    },
    ProductLine {
        title: "Highway Furniture",
        tagline: "Comprehensive Solutions",
        description: "Our highway furniture range includes all the essential elements needed \
                      for effective traffic management and road safety. From delineators and \
                      barriers to traffic cones and road studs, we provide a complete suite of \
                      products designed to guide traffic and enhance safety on roads and \
                      highways.",
        features: &[
            "Traffic cones and delineators",
            "Road studs and markers",
            "Bollards and channelizers",
            "Safety barricades and barriers",
            "Traffic management equipment",
        ],
        images: &[
            ImageRef {
                src: "/images/road signs.jpg",
                alt: "Road signs on a highway",
            },
            ImageRef {
                src: "/images/traffic-signs-road_1139-255.jpg",
                alt: "Traffic signs by the road",
            },
        ],
    },
    ProductLine {
        title: "Metal Beam Crash Barriers",
        tagline: "Maximum Safety",
        description: "Our metal beam crash barriers are designed to absorb impact energy and \
                      redirect vehicles back onto the road, minimizing damage and preventing \
                      serious accidents. Made from high-strength steel, these barriers provide \
                      reliable protection on highways, bridges, and other high-risk areas.",
        features: &[
            "W-beam and thrie-beam guardrails",
            "End treatments and terminals",
            "Bridge railings and transitions",
            "Median barriers and crash cushions",
            "Custom barrier solutions for specific needs",
        ],
        images: &[
            ImageRef {
                src: "/images/height-limit-road-sign-highway-road-slovenia_250132-14082.jpg",
                alt: "Height limit road sign",
            },
            ImageRef {
                src: "/images/new-recently-built-highway-brcko-district-bosnia-herzegovina_181624-3247(1).jpg",
                alt: "Recently built highway",
            },
        ],
    },
];

pub const SUPPORT_SERVICES: &[SupportService] = &[
    SupportService {
        title: "Installation Services",
        description: "Professional installation of all our products by experienced technicians, \
                      ensuring optimal performance and safety.",
    },
    SupportService {
        title: "Maintenance & Repair",
        description: "Regular maintenance and prompt repair services to ensure the longevity and \
                      effectiveness of installed safety infrastructure.",
    },
    SupportService {
        title: "Consultation & Design",
        description: "Expert consultation and custom design services to develop tailored road \
                      safety solutions for specific project requirements.",
    },
    SupportService {
        title: "Safety Audits",
        description: "Comprehensive safety audits to identify potential hazards and recommend \
                      appropriate safety measures for roads and highways.",
    },
    SupportService {
        title: "Project Management",
        description: "End-to-end project management for large-scale road safety infrastructure \
                      implementation projects.",
    },
    SupportService {
        title: "Training Programs",
        description: "Training programs for maintenance crews and safety personnel on proper \
                      installation and maintenance of road safety equipment.",
    },
];

// =============================================================================
// Home Page
// =============================================================================

/// Headline phrases cycled by the typewriter.
pub const HEADLINE_PHRASES: &[&str] = &[
    "Welcome to Signex",
    "We create beautiful Roads .",
    "And road safety solutions.",
];

pub const SERVICE_TEASERS: &[ServiceTeaser] = &[
    ServiceTeaser {
        title: "Road Sign Boards",
        description: "High-quality, durable road sign boards that meet all regulatory standards.",
        icon_path: "M13 10V3L4 14h7v7l9-11h-7z",
    },
    ServiceTeaser {
        title: "Highway Furniture",
        description: "Complete range of highway furniture for safe and efficient traffic management.",
        icon_path: "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7",
    },
    ServiceTeaser {
        title: "Crash Barriers",
        description: "Metal beam crash barriers designed for maximum safety and impact absorption.",
        icon_path: "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
    },
];

pub const HIGHLIGHTS: &[&str] = &[
    "ISO 9001:2015 certified manufacturing",
    "Compliance with all national safety standards",
    "Experienced team of engineers and designers",
    "Commitment to sustainable manufacturing practices",
];

// =============================================================================
// Media Page
// =============================================================================

/// Files expected under the gallery prefix.
pub const GALLERY_FILES: &[&str] = &[
    "WhatsApp Image 2025-08-30 at 10.23.35_097296c1.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.35_21f0ce5d.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.35_9e1b6a6d.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.36_47d6fc41.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.36_6d10c6fe.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.36_9faaf1f6.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.37_a9e066d4.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.38_1e30f3fb.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.39_74dc71a7.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.39_bcdaab6d.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.39_fb8a195d.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.40_4dd9de4f.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.40_d717d6e9.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.41_50c61716.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.41_6b1b17f8.jpg",
    "WhatsApp Image 2025-08-30 at 10.23.41_86b42b0a.jpg",
];
