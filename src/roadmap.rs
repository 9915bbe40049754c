//! Project Roadmap
//!
//! Static description of the project's five phases, shown in the sidebar
//! and the phase view. Pure presentation data.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deliverable {
    pub title: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub id: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub tasks: &'static [Deliverable],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDetails {
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
}

/// The phase that hosts the live task board
pub const TASK_BOARD_PHASE: &str = "phase2";

const fn item(title: &'static str, done: bool) -> Deliverable {
    Deliverable { title, done }
}

pub static PHASES: [Phase; 5] = [
    Phase {
        id: "phase1",
        label: "Phase I",
        subtitle: "Console App",
        icon: "01",
        tasks: &[
            item("Python Console App", true),
            item("Task Dataclass Model", true),
            item("In-Memory Task Store", true),
            item("Rich CLI Menu Interface", true),
            item("CRUD Operations", true),
            item("Toggle Task Completion", true),
        ],
    },
    Phase {
        id: "phase2",
        label: "Phase II",
        subtitle: "Full-Stack Web App",
        icon: "02",
        tasks: &[
            item("FastAPI Backend + SQLite", true),
            item("User Auth (JWT + bcrypt)", true),
            item("REST API Endpoints (6 routes)", true),
            item("Leptos Frontend (WebAssembly)", true),
            item("Login / Signup Pages", true),
            item("Task Dashboard with CRUD", true),
            item("Glassmorphism UI + Snowfall", true),
            item("CSS Animations", true),
        ],
    },
    Phase {
        id: "phase3",
        label: "Phase III",
        subtitle: "AI Chatbot",
        icon: "03",
        tasks: &[
            item("AI Chat Interface", false),
            item("Claude API Integration", false),
            item("Chat History Storage", false),
            item("Task Creation via Chat", false),
        ],
    },
    Phase {
        id: "phase4",
        label: "Phase IV",
        subtitle: "Smart Features",
        icon: "04",
        tasks: &[
            item("AI Task Suggestions", false),
            item("Smart Priority Sorting", false),
            item("Task Categories & Tags", false),
            item("Drag & Drop Reordering", false),
            item("Due Dates & Reminders", false),
        ],
    },
    Phase {
        id: "phase5",
        label: "Phase V",
        subtitle: "Enterprise & Deploy",
        icon: "05",
        tasks: &[
            item("Deploy to Vercel / Railway", false),
            item("Team Collaboration", false),
            item("Analytics Dashboard", false),
            item("Mobile Responsive PWA", false),
            item("Export Tasks (PDF/CSV)", false),
            item("Notification System", false),
        ],
    },
];

/// Look up a phase by id, falling back to the first one
pub fn find(id: &str) -> &'static Phase {
    PHASES.iter().find(|p| p.id == id).unwrap_or(&PHASES[0])
}

impl Phase {
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn is_complete(&self) -> bool {
        self.done_count() == self.tasks.len()
    }

    /// Fraction of deliverables done, 0.0 for an empty phase
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            0.0
        } else {
            self.done_count() as f64 / self.tasks.len() as f64
        }
    }

    pub fn details(&self) -> PhaseDetails {
        details(self.id)
    }
}

pub fn details(id: &str) -> PhaseDetails {
    match id {
        "phase1" => PhaseDetails {
            description: "A Python console-based todo application with rich formatting. Users interact through a numbered menu system to manage their tasks with full CRUD operations.",
            tech: &["Python 3.13", "Rich Library", "Dataclasses", "In-Memory Storage"],
            features: &[
                "Interactive CLI menu with 6 options",
                "Formatted table view of all tasks",
                "Add tasks with title & description",
                "Update task title or description",
                "Toggle task completion status",
                "Delete tasks by ID",
            ],
        },
        "phase3" => PhaseDetails {
            description: "AI-powered chatbot integrated into the todo app. Users can chat with Claude AI to get help managing tasks, get suggestions, and create tasks through natural conversation.",
            tech: &["Claude API", "Streaming Responses", "Chat UI", "Markdown Rendering"],
            features: &[
                "Real-time AI chat interface",
                "Create tasks via natural language",
                "AI task suggestions & prioritization",
                "Chat history persistence",
            ],
        },
        "phase4" => PhaseDetails {
            description: "Smart features powered by AI to enhance productivity. Intelligent task management with auto-categorization, priority sorting, and advanced organization tools.",
            tech: &["AI/ML", "Drag & Drop", "Calendar API", "Push Notifications"],
            features: &[
                "AI-powered task suggestions",
                "Smart priority auto-sorting",
                "Task categories & color tags",
                "Drag & drop task reordering",
                "Due dates with calendar picker",
            ],
        },
        "phase5" => PhaseDetails {
            description: "Enterprise-grade features for team collaboration, deployment to production, analytics dashboard, and mobile-first progressive web app.",
            tech: &["Vercel", "Neon PostgreSQL", "WebSockets", "PWA", "PDF Export"],
            features: &[
                "Production deployment (Vercel + Railway)",
                "Team workspaces & task sharing",
                "Analytics dashboard with charts",
                "Mobile responsive PWA",
                "Export tasks to PDF/CSV",
                "Push notification system",
            ],
        },
        // phase2 and anything unknown
        _ => PhaseDetails {
            description: "Full-stack web application with a web frontend and FastAPI backend. Features JWT authentication, SQLite database, glassmorphism UI with snowfall animations.",
            tech: &["Rust", "Leptos", "WebAssembly", "FastAPI", "SQLModel", "SQLite", "JWT"],
            features: &[
                "User signup & login with JWT tokens",
                "Secure REST API with 6 endpoints",
                "Real-time task CRUD operations",
                "Glassmorphism dark theme UI",
                "Snowfall animation effect",
                "3D hover effects on cards",
                "Animated task entry/exit",
                "Edit modal with backdrop blur",
            ],
        },
    }
}
