//! LaTeX resume templates: the static catalog, the starter document, and
//! generation of full documents from structured resume data.

use serde::{Deserialize, Serialize};

/// Catalog entry returned by the templates API.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The available template styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemplateKind {
    Modern,
    Minimal,
    Academic,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Academic,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "modern" => Some(TemplateKind::Modern),
            "minimal" => Some(TemplateKind::Minimal),
            "academic" => Some(TemplateKind::Academic),
            _ => None,
        }
    }

    pub fn info(&self) -> TemplateInfo {
        match self {
            TemplateKind::Modern => TemplateInfo {
                id: "modern",
                name: "Modern",
                description: "A clean, modern resume template with a professional look",
            },
            TemplateKind::Minimal => TemplateInfo {
                id: "minimal",
                name: "Minimal",
                description: "A minimalist resume template with clean typography",
            },
            TemplateKind::Academic => TemplateInfo {
                id: "academic",
                name: "Academic",
                description: "A comprehensive academic CV template suitable for research positions",
            },
        }
    }

    /// Generates a complete LaTeX document from structured resume data.
    pub fn generate(&self, data: &ResumeData) -> String {
        match self {
            TemplateKind::Modern => generate_modern(data),
            TemplateKind::Minimal => generate_minimal(data),
            TemplateKind::Academic => generate_academic(data),
        }
    }
}

/// Structured resume data accepted by `/latex/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub gpa: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Escapes LaTeX special characters in user-supplied text.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '&' => escaped.push_str("\\&"),
            '%' => escaped.push_str("\\%"),
            '$' => escaped.push_str("\\$"),
            '#' => escaped.push_str("\\#"),
            '_' => escaped.push_str("\\_"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn contact_line(data: &ResumeData) -> String {
    let mut items = Vec::new();
    if !data.email.is_empty() {
        items.push(format!(
            "\\href{{mailto:{}}}{{{}}}",
            data.email,
            escape_latex(&data.email)
        ));
    }
    if !data.phone.is_empty() {
        items.push(escape_latex(&data.phone));
    }
    if !data.location.is_empty() {
        items.push(escape_latex(&data.location));
    }
    if !data.linkedin.is_empty() {
        items.push(format!("\\href{{{}}}{{LinkedIn}}", data.linkedin));
    }
    if !data.github.is_empty() {
        items.push(format!("\\href{{{}}}{{GitHub}}", data.github));
    }
    if !data.website.is_empty() {
        items.push(format!("\\href{{{}}}{{Portfolio}}", data.website));
    }
    items.join(" $|$ ")
}

fn itemize(items: impl IntoIterator<Item = String>) -> String {
    let body: Vec<String> = items
        .into_iter()
        .map(|item| format!("    \\item {item}"))
        .collect();
    format!(
        "\\begin{{itemize}}[leftmargin=*,noitemsep]\n{}\n\\end{{itemize}}",
        body.join("\n")
    )
}

fn generate_modern(data: &ResumeData) -> String {
    let mut sections = Vec::new();

    if !data.summary.is_empty() {
        sections.push(format!(
            "\\section*{{Professional Summary}}\n{}",
            escape_latex(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        let entries: Vec<String> = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "\\textbf{{{}}} \\hfill {}\\\\\n\\textit{{{}}} \\hfill {}\n{}",
                    escape_latex(&exp.title),
                    escape_latex(&exp.dates),
                    escape_latex(&exp.company),
                    escape_latex(&exp.location),
                    itemize(exp.responsibilities.iter().map(|r| escape_latex(r)))
                )
            })
            .collect();
        sections.push(format!("\\section*{{Experience}}\n{}", entries.join("\n\n")));
    }

    if !data.education.is_empty() {
        let entries: Vec<String> = data
            .education
            .iter()
            .map(|edu| {
                let gpa = if edu.gpa.is_empty() {
                    String::new()
                } else {
                    format!(" (GPA: {})", escape_latex(&edu.gpa))
                };
                format!(
                    "\\textbf{{{}}}{} \\hfill {}\\\\\n\\textit{{{}}}",
                    escape_latex(&edu.degree),
                    gpa,
                    escape_latex(&edu.dates),
                    escape_latex(&edu.institution)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Education}}\n{}",
            entries.join("\\\\[5pt]\n")
        ));
    }

    if !data.skills.is_empty() {
        let skills: Vec<String> = data.skills.iter().map(|s| escape_latex(s)).collect();
        sections.push(format!("\\section*{{Skills}}\n{}", skills.join(", ")));
    }

    if !data.projects.is_empty() {
        let entries: Vec<String> = data
            .projects
            .iter()
            .map(|proj| {
                let tech = if proj.technologies.is_empty() {
                    String::new()
                } else {
                    let list: Vec<String> =
                        proj.technologies.iter().map(|t| escape_latex(t)).collect();
                    format!(" \\textit{{({})}}", list.join(", "))
                };
                format!(
                    "\\textbf{{{}}}{}: {}",
                    escape_latex(&proj.name),
                    tech,
                    escape_latex(&proj.description)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Projects}}\n{}",
            entries.join("\\\\[3pt]\n")
        ));
    }

    if !data.certifications.is_empty() {
        sections.push(format!(
            "\\section*{{Certifications}}\n{}",
            itemize(data.certifications.iter().map(|c| escape_latex(c)))
        ));
    }

    format!(
        r"\documentclass[11pt,a4paper]{{article}}

\usepackage[utf8]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage{{lmodern}}
\usepackage[margin=0.75in]{{geometry}}
\usepackage{{enumitem}}
\usepackage{{hyperref}}
\usepackage{{xcolor}}
\usepackage{{titlesec}}

\definecolor{{primary}}{{RGB}}{{0, 79, 144}}

\titleformat{{\section}}{{\large\bfseries\color{{primary}}}}{{}}{{0em}}{{}}[\titlerule]
\titlespacing{{\section}}{{0pt}}{{10pt}}{{5pt}}

\hypersetup{{colorlinks=true, linkcolor=primary, urlcolor=primary}}
\setlength{{\parindent}}{{0pt}}

\begin{{document}}

\begin{{center}}
    {{\LARGE\bfseries {name}}}\\[5pt]
    {contact}
\end{{center}}

{body}

\end{{document}}
",
        name = escape_latex(&data.name),
        contact = contact_line(data),
        body = sections.join("\n\n")
    )
}

fn generate_minimal(data: &ResumeData) -> String {
    let mut sections = Vec::new();

    if !data.summary.is_empty() {
        sections.push(format!(
            "\\textbf{{Summary}}\\\\[3pt]\n{}",
            escape_latex(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        let entries: Vec<String> = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "{} at {} \\hfill {}",
                    escape_latex(&exp.title),
                    escape_latex(&exp.company),
                    escape_latex(&exp.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\textbf{{Experience}}\\\\[3pt]\n{}",
            entries.join("\\\\[3pt]\n")
        ));
    }

    if !data.education.is_empty() {
        let entries: Vec<String> = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    "{}, {} \\hfill {}",
                    escape_latex(&edu.degree),
                    escape_latex(&edu.institution),
                    escape_latex(&edu.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\textbf{{Education}}\\\\[3pt]\n{}",
            entries.join("\\\\[3pt]\n")
        ));
    }

    if !data.skills.is_empty() {
        let skills: Vec<String> = data.skills.iter().map(|s| escape_latex(s)).collect();
        sections.push(format!(
            "\\textbf{{Skills}}\\\\[3pt]\n{}",
            skills.join(", ")
        ));
    }

    let location = if data.location.is_empty() {
        String::new()
    } else {
        format!(" $\\cdot$ {}", escape_latex(&data.location))
    };

    format!(
        r"\documentclass[11pt,a4paper]{{article}}

\usepackage[utf8]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage[margin=1in]{{geometry}}
\usepackage{{enumitem}}
\usepackage{{hyperref}}

\setlength{{\parindent}}{{0pt}}
\pagestyle{{empty}}

\begin{{document}}

{{\Large\bfseries {name}}}\\[5pt]
{email} $\cdot$ {phone}{location}

\hrule
\vspace{{10pt}}

{body}

\end{{document}}
",
        name = escape_latex(&data.name),
        email = escape_latex(&data.email),
        phone = escape_latex(&data.phone),
        location = location,
        body = sections.join("\n\n")
    )
}

fn generate_academic(data: &ResumeData) -> String {
    let mut sections = Vec::new();

    if !data.education.is_empty() {
        let entries: Vec<String> = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    "\\textbf{{{}}}\\\\{} \\hfill {}",
                    escape_latex(&edu.degree),
                    escape_latex(&edu.institution),
                    escape_latex(&edu.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Education}}\n{}",
            entries.join("\\\\[5pt]\n")
        ));
    }

    if !data.experience.is_empty() {
        let entries: Vec<String> = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "\\textbf{{{}}}, {} \\hfill {}",
                    escape_latex(&exp.title),
                    escape_latex(&exp.company),
                    escape_latex(&exp.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Research Experience}}\n{}",
            entries.join("\\\\[5pt]\n")
        ));
    }

    if !data.skills.is_empty() {
        let skills: Vec<String> = data.skills.iter().map(|s| escape_latex(s)).collect();
        sections.push(format!(
            "\\section*{{Technical Skills}}\n{}",
            skills.join(", ")
        ));
    }

    if !data.projects.is_empty() {
        let entries: Vec<String> = data
            .projects
            .iter()
            .map(|proj| {
                format!(
                    "\\textbf{{{}}}: {}",
                    escape_latex(&proj.name),
                    escape_latex(&proj.description)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Publications \\& Projects}}\n{}",
            entries.join("\\\\[3pt]\n")
        ));
    }

    let location = if data.location.is_empty() {
        String::new()
    } else {
        format!(" $|$ {}", escape_latex(&data.location))
    };

    format!(
        r"\documentclass[11pt,a4paper]{{article}}

\usepackage[utf8]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage[margin=1in]{{geometry}}
\usepackage{{enumitem}}
\usepackage{{hyperref}}
\usepackage{{titlesec}}

\titleformat{{\section}}{{\large\bfseries}}{{}}{{0em}}{{}}[\hrule]
\titlespacing{{\section}}{{0pt}}{{12pt}}{{6pt}}

\setlength{{\parindent}}{{0pt}}
\pagestyle{{empty}}

\begin{{document}}

\begin{{center}}
{{\LARGE\bfseries {name}}}\\[10pt]
{email} $|$ {phone}{location}
\end{{center}}

{body}

\end{{document}}
",
        name = escape_latex(&data.name),
        email = escape_latex(&data.email),
        phone = escape_latex(&data.phone),
        location = location,
        body = sections.join("\n\n")
    )
}

/// Sample resume used by the template preview endpoint.
pub fn sample_data() -> ResumeData {
    ResumeData {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        linkedin: "https://linkedin.com/in/johndoe".to_string(),
        github: "https://github.com/johndoe".to_string(),
        website: String::new(),
        summary: "Experienced software engineer with 5+ years of expertise in full-stack development."
            .to_string(),
        experience: vec![
            Experience {
                title: "Senior Software Engineer".to_string(),
                company: "Tech Company Inc.".to_string(),
                location: "San Francisco, CA".to_string(),
                dates: "2022 - Present".to_string(),
                responsibilities: vec![
                    "Led development of microservices architecture".to_string(),
                    "Mentored junior developers".to_string(),
                    "Improved system performance by 40%".to_string(),
                ],
            },
            Experience {
                title: "Software Engineer".to_string(),
                company: "Startup Co.".to_string(),
                location: "New York, NY".to_string(),
                dates: "2019 - 2022".to_string(),
                responsibilities: vec![
                    "Developed RESTful APIs".to_string(),
                    "Built React frontend applications".to_string(),
                ],
            },
        ],
        education: vec![Education {
            degree: "B.S. Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            dates: "2015 - 2019".to_string(),
            gpa: "3.8".to_string(),
        }],
        skills: vec![
            "Python".to_string(),
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "AWS".to_string(),
            "Docker".to_string(),
            "PostgreSQL".to_string(),
        ],
        projects: vec![Project {
            name: "Open Source Project".to_string(),
            description: "Contributed to popular open source framework".to_string(),
            technologies: vec!["Python".to_string(), "FastAPI".to_string()],
        }],
        certifications: vec![
            "AWS Certified Solutions Architect".to_string(),
            "Google Cloud Professional".to_string(),
        ],
    }
}

/// Starter document served to new editor sessions.
pub const STARTER_TEMPLATE: &str = r"\documentclass[11pt,a4paper]{article}

% Packages
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=0.75in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{xcolor}
\usepackage{titlesec}

% Colors
\definecolor{primary}{RGB}{0, 79, 144}

% Section formatting
\titleformat{\section}{\large\bfseries\color{primary}}{}{0em}{}[\titlerule]
\titlespacing{\section}{0pt}{10pt}{5pt}

\setlength{\parindent}{0pt}
\pagestyle{empty}

\begin{document}

% =============================================
% HEADER - Your Name and Contact Information
% =============================================
\begin{center}
    {\LARGE\bfseries Your Name}\\[5pt]
    \href{mailto:your.email@example.com}{your.email@example.com} $|$
    (123) 456-7890 $|$
    City, State $|$
    \href{https://linkedin.com/in/yourprofile}{LinkedIn} $|$
    \href{https://github.com/yourusername}{GitHub}
\end{center}

% =============================================
% PROFESSIONAL SUMMARY
% =============================================
\section*{Professional Summary}
Experienced professional with expertise in [your field]. Strong background in [key skills].
Passionate about [your interests/goals].

% =============================================
% EXPERIENCE
% =============================================
\section*{Experience}

\textbf{Job Title} \hfill Month Year -- Present\\
\textit{Company Name} \hfill City, State
\begin{itemize}[leftmargin=*,noitemsep]
    \item Accomplished X by implementing Y, resulting in Z
    \item Led team of N people to deliver project ahead of schedule
    \item Improved process efficiency by X\% through automation
\end{itemize}

% =============================================
% EDUCATION
% =============================================
\section*{Education}

\textbf{Degree Name} \hfill Year\\
\textit{University Name} \hfill City, State\\
Relevant coursework: Course 1, Course 2, Course 3

% =============================================
% SKILLS
% =============================================
\section*{Skills}

\textbf{Programming:} Python, JavaScript, TypeScript, Java\\
\textbf{Frameworks:} React, Node.js, Flask, Django\\
\textbf{Tools:} Git, Docker, AWS, Linux

\end{document}
";
