//! Content shipped with the page: typing phrases and the project catalog.

use crate::showcase::Project;

pub const PHRASES: &[&str] = &["Frontend Developer", "UI/UX Designer", "Web Developer"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Hotels",
        description: "A real-time hotels conferencing app...",
        tech: &["Tailwindcss", "React", "JS", "Node.js"],
        live_url: "https://hotels-pages.vercel.app/",
        code_url: "#",
    },
    Project {
        id: "2",
        title: "Net-clone",
        description: "A live social media platform with React and Redux...",
        tech: &["React", "Redux", "Node.js", "Tailwindcss"],
        live_url: "https://net-clone-one.vercel.app/",
        code_url: "#",
    },
    Project {
        id: "3",
        title: "Landing-Page",
        description: "A live Markdown blog editor with filtering...",
        tech: &["Node.js", "React", "JavaScript"],
        live_url: "https://landing-page-opal-nine-95.vercel.app/",
        code_url: "#",
    },
    Project {
        id: "4",
        title: "Tech-Page",
        description: "A live Markdown blog editor with filtering...",
        tech: &["Node.js", "React", "JavaScript"],
        live_url: "https://tech-page-theta.vercel.app/",
        code_url: "#",
    },
    Project {
        id: "5",
        title: "EDigital Design",
        description: "A modular e-learning platform with user...",
        tech: &["React", "Node.js"],
        live_url: "https://project-assign-3vq6.vercel.app/",
        code_url: "#",
    },
];
