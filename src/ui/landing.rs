use super::render_layout;
use maud::html;

const FEATURES: [(&str, &str); 8] = [
    ("Activity Tracking", "Track steps, workouts, and daily movement to stay active"),
    ("Heart Monitoring", "Keep an eye on your heart rate and overall cardiovascular health"),
    ("Sleep Analysis", "Understand your sleep patterns and improve your rest quality"),
    ("Hydration Tracking", "Monitor your daily water intake to stay hydrated"),
    ("Nutrition Logging", "Log meals and track calories, macros, and nutrients"),
    ("Health Metrics", "Follow key indicators like weight and resting heart rate"),
    ("Wellness Journal", "Record your mood, energy, and daily health observations"),
    ("Privacy Focused", "Your health data stays on the machine running this server"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Seeing my progress charts every morning kept me on a consistent routine until I hit my weight goal.",
        "Sarah Johnson",
        "Fitness Enthusiast",
    ),
    (
        "With a busy schedule I needed something quick. Logging sleep and meals takes a minute and my energy is up.",
        "Michael Chen",
        "Software Engineer",
    ),
    (
        "The journal helped me spot what triggers my migraines by lining symptoms up against my other metrics.",
        "Emily Rodriguez",
        "Healthcare Professional",
    ),
];

pub fn render_landing(logged_in: bool) -> String {
    let body = html! {
        section.page.landing {
            div.hero {
                h1 { "Track Your Health " span.gradient { "Journey" } " With Precision" }
                p.subtitle {
                    "Monitor fitness goals, nutrition, sleep patterns, and more from one place."
                }
                div.hero-actions {
                    a.btn.btn-primary href="/dashboard" { "Get Started Free" }
                    a.btn.btn-outline href="#features" { "See How It Works" }
                }
            }

            section id="features" {
                h2 { "Power Your Wellness Journey" }
                p.subtitle {
                    "Tools that help you understand your body and make informed decisions."
                }
                div.grid {
                    @for (title, description) in FEATURES {
                        div.card.feature {
                            h3 { (title) }
                            p.hint { (description) }
                        }
                    }
                }
            }

            section.testimonials {
                h2 { "Why Our Users Love Us" }
                div.grid {
                    @for (quote, name, role) in TESTIMONIALS {
                        figure.card {
                            blockquote { (quote) }
                            figcaption {
                                strong { (name) }
                                br;
                                span.hint { (role) }
                            }
                        }
                    }
                }
            }

            section.card.cta {
                h2 { "Ready to Transform Your " span.gradient { "Health Journey" } "?" }
                p.subtitle { "Start logging today and watch the trends build up." }
                div.hero-actions {
                    a.btn.btn-primary href="/journal?new=true" { "Start Your Journal" }
                    a.btn.btn-outline href="/dashboard" { "View Demo" }
                }
            }
        }
    };
    render_layout("Home", None, logged_in, body, "")
}
