use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Simple,
    Industrial,
}

/// Class tokens and copy that differ between the two looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub body: &'static str,
    pub nav: &'static str,
    pub nav_solid: &'static str,
    pub section: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
    pub button: &'static str,
    pub bar_track: &'static str,
    pub submit_label: &'static str,
    pub hero_tagline: &'static str,
}

const SIMPLE: ThemeStyle = ThemeStyle {
    body: "min-h-screen bg-slate-950 text-slate-200 font-sans",
    nav: "fixed top-0 left-0 w-full z-50 bg-transparent",
    nav_solid: "fixed top-0 left-0 w-full z-50 bg-slate-950/80 backdrop-blur-md",
    section: "py-24 max-w-7xl mx-auto px-6",
    heading: "text-3xl md:text-4xl font-bold text-white mb-4",
    accent: "text-primary-400",
    card: "rounded-xl bg-slate-900 border border-slate-800 p-6",
    button: "px-5 py-2.5 bg-white text-slate-950 font-semibold rounded-lg",
    bar_track: "h-2 rounded-full bg-slate-800",
    submit_label: "Send Message",
    hero_tagline: "Operations Engineer turned Data Analyst",
};

const INDUSTRIAL: ThemeStyle = ThemeStyle {
    body: "min-h-screen bg-industrial-steel text-industrial-concrete font-industrial",
    nav: "fixed top-0 left-0 w-full z-50 bg-transparent border-b border-transparent",
    nav_solid: "fixed top-0 left-0 w-full z-50 bg-industrial-steel/90 border-b-2 border-industrial-orange",
    section: "py-24 max-w-7xl mx-auto px-6 relative",
    heading: "text-4xl md:text-5xl font-heading font-extrabold tracking-tighter uppercase",
    accent: "text-industrial-orange",
    card: "rounded-sm bg-industrial-steel border-2 border-slate-800 p-6",
    button: "px-5 py-3 bg-industrial-orange text-slate-950 font-bold uppercase tracking-widest",
    bar_track: "h-2 bg-slate-900 border border-slate-800",
    submit_label: "TRANSMIT_REQUEST",
    hero_tagline: "FIELD OPERATIONS // DATA SCIENCE",
};

impl Theme {
    pub fn style(&self) -> &'static ThemeStyle {
        match self {
            Theme::Simple => &SIMPLE,
            Theme::Industrial => &INDUSTRIAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Simple => "simple",
            Theme::Industrial => "industrial",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Theme::Simple),
            "industrial" => Ok(Theme::Industrial),
            other => Err(format!("unknown theme '{}', expected simple or industrial", other)),
        }
    }
}
