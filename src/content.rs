//! Static site content. Every record here is a compile-time literal; the
//! only runtime state anywhere in the app is UI state (theme, active
//! filter, animation progress).

pub const NAME: &str = "Nitant Upasani";
pub const TITLE: &str = "Researcher, Mathematician, and Innovator";
pub const SUMMARY: &str = "Aspiring to make a positive contribution to society and the environment through scientific openness, inclusivity, and lifelong learning.";

pub const PROFILE_IMAGE: &str = "/assets/profile.svg";
pub const PROFILE_IMAGE_FALLBACK: &str = "https://placehold.co/320x320/1e293b/94a3b8?text=NU";

/// Which source the profile photo is showing. A load error swaps in the
/// hosted placeholder once; `Fallback` is terminal, so a failing
/// placeholder cannot loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageSource {
    #[default]
    Primary,
    Fallback,
}

impl ImageSource {
    pub fn src(self) -> &'static str {
        match self {
            ImageSource::Primary => PROFILE_IMAGE,
            ImageSource::Fallback => PROFILE_IMAGE_FALLBACK,
        }
    }

    pub fn on_error(self) -> Self {
        ImageSource::Fallback
    }
}

pub struct Contact {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub google_scholar: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "n.a.upasani@tue.nl",
    linkedin: "https://www.linkedin.com/in/nitant-upasani-1a597614a",
    google_scholar: "https://scholar.google.com/citations?user=9_y3-7sAAAAJ",
};

pub struct About {
    pub philosophy: &'static str,
    pub strengths: &'static str,
    pub values: &'static str,
}

pub const ABOUT: About = About {
    philosophy: "My philosophy involves scientific openness, inclusivity, and lifelong learning. As a mathematician, I enjoy modeling and solving both abstract and real-world problems.",
    strengths: "My perceived strengths are perseverance, an affinity for technology, and a strong will and curiosity to learn new things.",
    values: "I value kindness, humor, and ambition in the workplace and do my best to embody these qualities myself.",
};

/// Skill chips rendered inside the marquee strip.
pub const SKILLS: &[&str] = &[
    "C/C++", "Python", "MATLAB", "MySQL", "HTML/CSS", "JavaScript", ".NET",
    "Angular", "React", "Flutter", "Dart", "LaTeX", "Rust",
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: Option<&'static str>,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "PhD Researcher",
        institution: "Brains4Buildings",
        period: "Sept 2021 - Present",
        description: Some("Conducting occupant-centered comfort research for optimized HVAC control. Sole PhD in WP3 'Smart User targeted interfaces and feedback'."),
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "PhD, Built Environment",
        institution: "TU Eindhoven, Netherlands",
        period: "2021-2025",
        description: None,
    },
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "Full Stack Developer",
        institution: "Q3 Technologies, India",
        period: "Aug 2020 - July 2021",
        description: Some("Worked on web development projects with technologies like Angular, React, and .NET."),
    },
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "Founding Engineer",
        institution: "GPLAN.in",
        period: "Jan 2018 - May 2020",
        description: Some("Developed graph-based floorplanning algorithms for a web application for architects."),
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "M.Sc. (Hons.) Mathematics & B.E. (Hons.) Civil Engineering",
        institution: "BITS Pilani, India",
        period: "2015-2020",
        description: None,
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Publication tag this project links to; clicking the card filters the
    /// Publications section by it.
    pub filter_tag: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Thermal Comfort Modeling",
        description: "Developed a 72% accurate, building-specific thermal comfort model using interpretable machine learning (SHAP, PDPs) on data from a custom-built app.",
        tags: &["Machine Learning", "App Development"],
        filter_tag: "Thermal Comfort",
    },
    Project {
        title: "Building Interfaces and Satisfaction",
        description: "Investigated occupant satisfaction in 11 Dutch offices, finding significant correlations between autonomy, competence, and satisfaction from 366 responses.",
        tags: &["Statistical Analysis", "User Satisfaction"],
        filter_tag: "User Satisfaction",
    },
    Project {
        title: "GPLAN - Floorplanning Tool",
        description: "Co-developed novel graph theory and optimization algorithms to instantly generate multiple floorplans from adjacency and dimensional constraints.",
        tags: &["Graph Algorithms", "Optimization"],
        filter_tag: "Graph Theory",
    },
    Project {
        title: "Rainwater Harvesting Network Optimisation",
        description: "Segmented satellite imagery using CNN and solved the Steiner Tree problem with a genetic algorithm to minimize pipeline costs.",
        tags: &["CNN", "Genetic Algorithms"],
        filter_tag: "Optimization",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AppIcon {
    Smartphone,
    Gamepad,
    Microphone,
}

/// Recognized accent colors for app cards. A typed key instead of a free
/// string so an unknown color cannot silently produce unstyled markup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Blue,
    Green,
    Purple,
}

impl ColorKey {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Green => "accent-green",
            Self::Purple => "accent-purple",
        }
    }
}

pub struct AppEntry {
    pub icon: AppIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub color: ColorKey,
    pub in_progress: bool,
}

pub const APPS: &[AppEntry] = &[
    AppEntry {
        icon: AppIcon::Smartphone,
        title: "Comfort App",
        description: "Developed for PhD research to collect real-time occupant comfort feedback via daily push notifications. Published on both major app stores.",
        tags: &["Mobile App"],
        link: Some("https://play.google.com/store/apps/details?id=com.comfort.comfortfeedbackapp"),
        color: ColorKey::Blue,
        in_progress: false,
    },
    AppEntry {
        icon: AppIcon::Gamepad,
        title: "GPLAN Game",
        description: "Co-developed an educational game where users generate valid floorplans by interpreting room adjacency graphs, guided by Prof. Shekhawat.",
        tags: &["Game Development"],
        link: None,
        color: ColorKey::Green,
        in_progress: true,
    },
    AppEntry {
        icon: AppIcon::Microphone,
        title: "SHE Visualizer",
        description: "A voice-to-image web app using OpenAI APIs to transcribe voice, generate AI visuals, and email responses instantly to users at SHE 2024.",
        tags: &["WordPress", "OpenAI API"],
        link: None,
        color: ColorKey::Purple,
        in_progress: false,
    },
];

pub struct Teaching {
    pub workshops: &'static [&'static str],
    pub supervision: &'static [&'static str],
}

pub const TEACHING: Teaching = Teaching {
    workshops: &[
        "Graph-Theoretic algorithms for Building Architectural Floorplans (CAADRIA 2020).",
        "MATLAB for optimization, neural networks, and structural dynamics (BITS Pilani, 2019).",
    ],
    supervision: &[
        "Master Project: Interface design for all occupants of TU/e (2024).",
        "Tutor and Guest Lecturer: Smart Building Methodology and Technology, TU/e (2022-24).",
    ],
};

pub struct Publication {
    pub text: &'static str,
    pub journal: &'static str,
    pub link: Option<&'static str>,
    pub tags: &'static [&'static str],
}

/// The filter chip vocabulary. "All" is first and always recognized; every
/// other entry must actually tag at least one publication (checked below).
pub const FILTER_TAGS: &[&str] = &[
    "All",
    "Thermal Comfort",
    "Machine Learning",
    "Graph Theory",
    "Floorplanning",
    "User Satisfaction",
    "Building Interfaces",
    "Optimization",
    "Structural Engineering",
];

pub static PUBLICATIONS: &[Publication] = &[
    Publication {
        text: "Upasani, N., Guerra-Santin, O., & Mohammadi, M. (2024). Developing building-specific, occupant-centric thermal comfort models: A methodological approach.",
        journal: "Journal of Building Engineering, 95.",
        link: Some("https://doi.org/10.1016/j.jobe.2024.109705"),
        tags: &["Thermal Comfort", "Machine Learning"],
    },
    Publication {
        text: "Upasani, N., Shekhawat, K., & Sachdeva, G. (2020). Automated Generation of Dimensioned Rectangular Floorplans.",
        journal: "Automation in Construction, 113.",
        link: Some("https://doi.org/10.1016/j.autcon.2020.103134"),
        tags: &["Graph Theory", "Floorplanning"],
    },
    Publication {
        text: "Upasani, N., Guerra-Santin, M., Mohammadi, M., Seraj, M., & Joostens, F. (2024). Understanding thermal comfort using self-reporting and interpretable machine learning.",
        journal: "Energy Efficiency (revision submitted).",
        link: None,
        tags: &["Thermal Comfort", "Machine Learning"],
    },
    Publication {
        text: "Upasani, N., Guerra-Santin, O., & Mohammadi, M. (2025). A self-determination theory approach to evaluating indoor environment satisfaction through building interfaces.",
        journal: "In preparation.",
        link: None,
        tags: &["User Satisfaction", "Building Interfaces"],
    },
    Publication {
        text: "Upasani, N., Guerra-Santin, O., & Mohammadi, M. (2025). Towards a standardized digital platform for smart buildings: Ensuring a two-way communication.",
        journal: "In preparation.",
        link: None,
        tags: &["Building Interfaces"],
    },
    Publication {
        text: "Shekhawat, K., Upasani, N., Bisht, S., & Jain, R. (2021). A tool for computer-generated dimensioned floorplans based on given adjacencies.",
        journal: "Automation in Construction, 127.",
        link: Some("https://doi.org/10.1016/j.autcon.2021.103710"),
        tags: &["Graph Theory", "Floorplanning"],
    },
    Publication {
        text: "Bisht, S., Shekhawat, K., Upasani, N., Jain, R., Tiwaskar, R., & Hebbar, C. (2022). Transforming an Adjacency Graph into Dimensioned Floorplan Layouts.",
        journal: "Computer Graphics Forum, 41(6).",
        link: Some("https://doi.org/10.1111/cgf.14555"),
        tags: &["Graph Theory", "Floorplanning"],
    },
    Publication {
        text: "Nagpal, G., Chanda, U., & Upasani, N. (2022). Inventory replenishment policies for two successive generations price-sensitive technology products.",
        journal: "Journal of Industrial and Management Optimization, 18(3).",
        link: Some("https://doi.org/10.3934/jimo.2021031"),
        tags: &["Optimization"],
    },
    Publication {
        text: "Rawat, S., Narula, R., Upasani, N., & Muthukumar, G. (2019). A relook on dosage of basalt chopped fibres and its influence on characteristics of concrete.",
        journal: "Advances in Structural Engineering and Rehabilitation.",
        link: Some("https://doi.org/10.1007/978-981-13-7615-3_21"),
        tags: &["Structural Engineering"],
    },
    Publication {
        text: "Upasani, N., Bansal, M., Satapathy, A., Rawat, S., & Muthukumar, G. (2019). Design and Performance Criteria for Fire-Resistant Design of Structures--An Overview.",
        journal: "Advances in Structural Technologies.",
        link: Some("https://doi.org/10.1007/978-981-15-5235-9_22"),
        tags: &["Structural Engineering"],
    },
    Publication {
        text: "Rawat, S., Narula, R., Kaushik, P., et al. (2024). Seismic and Fire Behaviour of FRP Strengthened Reinforced High Strength Concrete Structures-An Overview.",
        journal: "RC Structures Strengthened with FRP for Earthquake Resistance.",
        link: Some("https://doi.org/10.1007/978-981-97-1945-8_13"),
        tags: &["Structural Engineering"],
    },
    Publication {
        text: "Rai, A., Upasani, N., Rawat, S., & Muthukumar, G. (2018). Methodology for numerical simulation of the behaviour of deep beams.",
        journal: "11th Structural Engineering Convention (SEC-2018).",
        link: None,
        tags: &["Structural Engineering"],
    },
    Publication {
        text: "Upasani, N., & Gupta, R. (2019). Optimization of rainwater harvesting network in rural scenario using gis and ga.",
        journal: "5th International Conference on Soft Computing and Optimization.",
        link: Some("https://www.academia.edu/40409272/Optimization_of_rainwater_harvesting_network_in_rural_scenario_using_gis_and_ga"),
        tags: &["Optimization"],
    },
    Publication {
        text: "Guerra-Santin, O., Lange, V., Upasani, N., Corsius, M., & Jeurens, J. (2025). User-centric interfaces for smart and healthy buildings: Exploring a design methodology.",
        journal: "Smart Healthy Environments (SHE) World Conference.",
        link: Some("https://conference2024.sheworldconference.com/"),
        tags: &["Building Interfaces", "User Satisfaction"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_starts_with_all() {
        assert_eq!(FILTER_TAGS.first(), Some(&"All"));
    }

    #[test]
    fn image_fallback_is_terminal() {
        let source = ImageSource::default();
        assert_eq!(source, ImageSource::Primary);
        assert_eq!(source.src(), PROFILE_IMAGE);

        let after_error = source.on_error();
        assert_eq!(after_error, ImageSource::Fallback);
        assert_eq!(after_error.src(), PROFILE_IMAGE_FALLBACK);

        // A failing placeholder keeps the same source; no second swap.
        assert_eq!(after_error.on_error(), after_error);
        assert_eq!(after_error.on_error().src(), PROFILE_IMAGE_FALLBACK);
    }

    #[test]
    fn every_publication_tag_is_in_vocabulary() {
        for publication in PUBLICATIONS {
            for tag in publication.tags {
                assert!(
                    FILTER_TAGS.contains(tag),
                    "publication tag {tag:?} missing from FILTER_TAGS"
                );
            }
        }
    }

    #[test]
    fn every_project_filter_tag_matches_a_publication() {
        for project in PROJECTS {
            assert!(
                FILTER_TAGS.contains(&project.filter_tag),
                "project {:?} filters by unrecognized tag {:?}",
                project.title,
                project.filter_tag
            );
            assert!(
                PUBLICATIONS
                    .iter()
                    .any(|publication| publication.tags.contains(&project.filter_tag)),
                "project {:?} filters by {:?} but no publication carries it",
                project.title,
                project.filter_tag
            );
        }
    }

    #[test]
    fn non_all_vocabulary_tags_are_used() {
        for tag in &FILTER_TAGS[1..] {
            assert!(
                PUBLICATIONS
                    .iter()
                    .any(|publication| publication.tags.contains(tag)),
                "vocabulary tag {tag:?} tags no publication"
            );
        }
    }

    #[test]
    fn timeline_and_publications_are_nonempty() {
        assert!(!TIMELINE.is_empty());
        assert!(!PUBLICATIONS.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!APPS.is_empty());
    }
}
