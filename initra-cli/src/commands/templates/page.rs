use super::Language;
use crate::commands::naming::NameVariants;

/// `<Name>Page` component for a React router setup.
pub fn react_page(name: &NameVariants, language: Language, css: bool) -> String {
    let pascal = &name.pascal;
    let class = format!("{}-page", name.kebab);
    let style_import = if css {
        format!("import './{pascal}Page.scss';\n")
    } else {
        String::new()
    };
    let annotation = if language.is_typescript() { ": React.FC" } else { "" };
    format!(
        r#"import React from 'react';
{style_import}
const {pascal}Page{annotation} = () => {{
  return (
    <div className="{class}">
      <h1 className="{class}__title">{pascal}</h1>
      <p className="{class}__description">Welcome to the {pascal} page.</p>
      <section className="{class}__content">
        {{/* Your page content goes here */}}
      </section>
    </div>
  );
}};

export default {pascal}Page;
"#
    )
}

/// `page.tsx` for the Next.js app router.
pub fn next_page(name: &NameVariants, language: Language, css: bool) -> String {
    let pascal = &name.pascal;
    let class = format!("{}-page", name.kebab);
    let mut header = String::new();
    if language.is_typescript() {
        header.push_str("import type { Metadata } from 'next';\n");
    }
    if css {
        header.push_str(&format!("import './{}.scss';\n", name.kebab));
    }
    if !header.is_empty() {
        header.push('\n');
    }
    let metadata_type = if language.is_typescript() { ": Metadata" } else { "" };
    format!(
        r#"{header}export const metadata{metadata_type} = {{
  title: '{pascal}',
  description: '{pascal} page',
}};

export default function {pascal}Page() {{
  return (
    <div className="{class}">
      <h1 className="{class}__title">{pascal}</h1>
      <p className="{class}__description">Welcome to the {pascal} page.</p>
      <section className="{class}__content">
        {{/* Your page content goes here */}}
      </section>
    </div>
  );
}}
"#
    )
}

pub fn next_loading() -> String {
    r#"export default function Loading() {
  return (
    <div className="loading-container">
      <div className="loading-spinner">
        <div className="spinner"></div>
        <p>Loading...</p>
      </div>
    </div>
  );
}
"#
    .to_string()
}

pub fn next_error(language: Language) -> String {
    let params = if language.is_typescript() {
        r#"{
  error,
  reset,
}: {
  error: Error & { digest?: string };
  reset: () => void;
}"#
    } else {
        "{ error, reset }"
    };
    format!(
        r#"'use client';

export default function Error({params}) {{
  return (
    <div className="error-container">
      <h2>Something went wrong!</h2>
      <p>{{error.message}}</p>
      <button onClick={{() => reset()}}>Try again</button>
    </div>
  );
}}
"#
    )
}

pub fn stylesheet(name: &NameVariants) -> String {
    let class = format!("{}-page", name.kebab);
    format!(
        r#".{class} {{
  min-height: 100vh;
  padding: 2rem;
  background-color: #f5f5f5;

  &__title {{
    margin-bottom: 1rem;
    font-size: 2.5rem;
    font-weight: bold;
    text-align: center;
    color: #333333;
  }}

  &__description {{
    margin-bottom: 2rem;
    font-size: 1.2rem;
    text-align: center;
    color: #666666;
  }}

  &__content {{
    max-width: 800px;
    margin: 0 auto;
  }}
}}
"#
    )
}

pub fn test(name: &NameVariants, next: bool) -> String {
    let pascal = &name.pascal;
    let import_path = if next {
        "./page".to_string()
    } else {
        format!("./{pascal}Page")
    };
    format!(
        r#"import React from 'react';
import {{ render, screen }} from '@testing-library/react';
import {pascal}Page from '{import_path}';

describe('{pascal}Page', () => {{
  it('renders the page title', () => {{
    render(<{pascal}Page />);
    expect(screen.getByText('{pascal}')).toBeInTheDocument();
  }});
}});
"#
    )
}
