use super::{current_year, Language};
use crate::commands::naming::NameVariants;

/// Rendering flavour of a React component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentKind {
    #[default]
    Plain,
    /// Adds the `'use client'` directive.
    Client,
    /// Next.js server component: plain function, no directive.
    Server,
}

/// A component prop, written `name` or `name:type` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    pub name: String,
    /// TypeScript type; `string` when none was given.
    pub ty: String,
}

impl Prop {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Prop {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

pub struct ComponentTemplate<'a> {
    pub name: &'a NameVariants,
    pub props: &'a [Prop],
    pub layout: bool,
    pub kind: ComponentKind,
    pub language: Language,
    pub css: bool,
}

impl ComponentTemplate<'_> {
    /// Prop list as the component sees it. Layouts always take `children`.
    fn fields(&self) -> Vec<Prop> {
        let mut props = self.props.to_vec();
        if self.layout && !props.iter().any(|p| p.name == "children") {
            props.push(Prop::new("children", "React.ReactNode"));
        }
        props
    }
}

pub fn source(t: &ComponentTemplate) -> String {
    let name = &t.name.pascal;
    let props = t.fields();
    let ts = t.language.is_typescript();

    let mut header = String::new();
    if t.kind == ComponentKind::Client {
        header.push_str("'use client';\n\n");
    }
    header.push_str("import React from 'react';\n");
    if t.css {
        header.push_str(&format!("import './{name}.scss';\n"));
    }
    header.push('\n');

    if ts && !props.is_empty() {
        header.push_str(&format!("interface {name}Props {{\n"));
        for prop in &props {
            header.push_str(&format!("  {}: {};\n", prop.name, prop.ty));
        }
        header.push_str("}\n\n");
    }

    let names = props
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let params = if props.is_empty() {
        String::new()
    } else if ts && t.kind == ComponentKind::Server {
        format!("{{ {names} }}: {name}Props")
    } else {
        format!("{{ {names} }}")
    };

    let body = if t.layout {
        layout_body(t.name)
    } else {
        basic_body(t.name, t.props)
    };

    if t.kind == ComponentKind::Server {
        format!(
            r#"{header}export default function {name}({params}) {{
  return (
{body}
  );
}}
"#
        )
    } else {
        let annotation = match (ts, props.is_empty()) {
            (false, _) => String::new(),
            (true, true) => ": React.FC".to_string(),
            (true, false) => format!(": React.FC<{name}Props>"),
        };
        format!(
            r#"{header}const {name}{annotation} = ({params}) => {{
  return (
{body}
  );
}};

export default {name};
"#
        )
    }
}

fn basic_body(name: &NameVariants, props: &[Prop]) -> String {
    let class = &name.kebab;
    let pascal = &name.pascal;
    let content = if props.is_empty() {
        format!("        {{/* Your {} content here */}}", name.lower)
    } else {
        props
            .iter()
            .map(|p| format!("        <p className=\"{class}__prop\">{{{}}}</p>", p.name))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        r#"    <div className="{class}">
      <h2 className="{class}__title">{pascal}</h2>
      <div className="{class}__content">
{content}
      </div>
    </div>"#
    )
}

fn layout_body(name: &NameVariants) -> String {
    let class = &name.kebab;
    let pascal = &name.pascal;
    let year = current_year();
    format!(
        r#"    <div className="{class}">
      <header className="{class}__header">
        <h1 className="{class}__logo">{pascal}</h1>
        <nav className="{class}__nav">{{/* Navigation items */}}</nav>
      </header>

      <main className="{class}__main">{{children}}</main>

      <footer className="{class}__footer">
        <p>&copy; {year} {pascal}. All rights reserved.</p>
      </footer>
    </div>"#
    )
}

pub fn stylesheet(name: &NameVariants, layout: bool) -> String {
    let class = &name.kebab;
    if layout {
        format!(
            r#".{class} {{
  min-height: 100vh;
  display: flex;
  flex-direction: column;

  &__header {{
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background-color: #ffffff;
    border-bottom: 1px solid #e5e7eb;
    position: sticky;
    top: 0;
    z-index: 100;
  }}

  &__logo {{
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
    color: #1f2937;
  }}

  &__nav {{
    display: flex;
    gap: 1.5rem;
  }}

  &__main {{
    flex: 1;
    max-width: 1200px;
    width: 100%;
    margin: 0 auto;
    padding: 2rem;
  }}

  &__footer {{
    padding: 1.5rem 2rem;
    text-align: center;
    font-size: 0.875rem;
    color: #9ca3af;
    background-color: #1f2937;
  }}

  @media (max-width: 768px) {{
    &__header {{
      flex-direction: column;
      gap: 1rem;
      padding: 1rem;
    }}

    &__main {{
      padding: 1rem;
    }}
  }}
}}
"#
        )
    } else {
        format!(
            r#".{class} {{
  padding: 1rem;
  border-radius: 8px;
  background-color: #ffffff;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);

  &__title {{
    margin: 0 0 1rem 0;
    font-size: 1.5rem;
    font-weight: 600;
    color: #1f2937;
  }}

  &__content {{
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
  }}

  &__prop {{
    padding: 0.5rem;
    border: 1px solid #e5e7eb;
    border-radius: 4px;
    background-color: #f9fafb;
    font-family: monospace;
    font-size: 0.875rem;
  }}
}}
"#
        )
    }
}

pub fn test(t: &ComponentTemplate) -> String {
    let name = &t.name.pascal;
    let attrs: String = t
        .props
        .iter()
        .filter(|p| p.name != "children")
        .map(|p| format!(" {0}=\"{0}\"", p.name))
        .collect();
    let (element, expected) = if t.layout {
        (format!("<{name}{attrs}><p>Layout content</p></{name}>"), "Layout content".to_string())
    } else {
        (format!("<{name}{attrs} />"), name.clone())
    };
    format!(
        r#"import React from 'react';
import {{ render, screen }} from '@testing-library/react';
import {name} from './{name}';

describe('{name}', () => {{
  it('renders without crashing', () => {{
    render({element});
    expect(screen.getByText('{expected}')).toBeInTheDocument();
  }});
}});
"#
    )
}

pub fn story(t: &ComponentTemplate) -> String {
    let name = &t.name.pascal;
    let args: String = t
        .props
        .iter()
        .filter(|p| p.name != "children")
        .map(|p| format!("    {0}: '{0}',\n", p.name))
        .collect();
    if t.language.is_typescript() {
        format!(
            r#"import type {{ Meta, StoryObj }} from '@storybook/react';
import {name} from './{name}';

const meta: Meta<typeof {name}> = {{
  title: 'Components/{name}',
  component: {name},
}};

export default meta;
type Story = StoryObj<typeof {name}>;

export const Default: Story = {{
  args: {{
{args}  }},
}};
"#
        )
    } else {
        format!(
            r#"import {name} from './{name}';

export default {{
  title: 'Components/{name}',
  component: {name},
}};

export const Default = {{
  args: {{
{args}  }},
}};
"#
        )
    }
}

pub fn index(name: &NameVariants) -> String {
    format!("export {{ default }} from './{}';\n", name.pascal)
}
