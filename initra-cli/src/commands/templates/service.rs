use super::Language;
use crate::commands::naming::NameVariants;
use crate::commands::project::Framework;

/// Type aliases emitted at the top of TypeScript services.
fn type_definitions(pascal: &str, server: bool) -> String {
    let timestamps = if server {
        "  createdAt: Date;\n  updatedAt: Date;\n"
    } else {
        ""
    };
    let envelope = if server {
        String::new()
    } else {
        r#"
export interface ApiResponse<T> {
  data: T;
  message: string;
  success: boolean;
}
"#
        .to_string()
    };
    format!(
        r#"export interface {pascal}Data {{
  id: string;
{timestamps}  [key: string]: any;
}}

export interface {pascal}CreateData {{
  [key: string]: any;
}}

export interface {pascal}UpdateData {{
  [key: string]: any;
}}
{envelope}
"#
    )
}

/// Browser-side service wrapping `fetch` calls to the REST endpoints.
pub fn client(name: &NameVariants, language: Language, framework: Framework) -> String {
    let pascal = &name.pascal;
    let camel = &name.camel;
    let resource = &name.kebab;
    let ts = language.is_typescript();
    let base_url = if framework == Framework::Next {
        "/api"
    } else {
        "http://localhost:3001/api"
    };

    let types = if ts { type_definitions(pascal, false) } else { String::new() };
    let private = if ts { "private " } else { "" };
    let id = if ts { "id: string" } else { "id" };
    let ret = |inner: &str| {
        if ts {
            format!(": Promise<ApiResponse<{inner}>>")
        } else {
            String::new()
        }
    };
    let create_data = if ts { format!("data: {pascal}CreateData") } else { "data".to_string() };
    let update_data = if ts { format!("data: {pascal}UpdateData") } else { "data".to_string() };
    let ret_list = ret(&format!("{pascal}Data[]"));
    let ret_one = ret(&format!("{pascal}Data"));
    let ret_deleted = ret("{ id: string }");

    format!(
        r#"{types}class {pascal}Service {{
  {private}baseURL = '{base_url}';

  {private}async request(path{path_ty}, init{init_ty}) {{
    const response = await fetch(`${{this.baseURL}}/{resource}${{path}}`, {{
      headers: {{ 'Content-Type': 'application/json' }},
      ...init,
    }});

    if (!response.ok) {{
      throw new Error(`HTTP error! status: ${{response.status}}`);
    }}

    return response.json();
  }}

  // GET - Fetch all {resource} records
  async getAll(){ret_list} {{
    return this.request('');
  }}

  // GET - Fetch a single {resource} by ID
  async getById({id}){ret_one} {{
    return this.request(`/${{id}}`);
  }}

  // POST - Create a new {resource}
  async create({create_data}){ret_one} {{
    return this.request('', {{ method: 'POST', body: JSON.stringify(data) }});
  }}

  // PUT - Update an existing {resource}
  async update({id}, {update_data}){ret_one} {{
    return this.request(`/${{id}}`, {{ method: 'PUT', body: JSON.stringify(data) }});
  }}

  // DELETE - Remove a {resource}
  async delete({id}){ret_deleted} {{
    return this.request(`/${{id}}`, {{ method: 'DELETE' }});
  }}
}}

export const {camel}Service = new {pascal}Service();
export default {camel}Service;
"#,
        path_ty = if ts { ": string" } else { "" },
        init_ty = if ts { ": RequestInit = {}" } else { " = {}" },
    )
}

/// Server-side data service. Node gets an in-memory store, Next/React a stub.
pub fn server(name: &NameVariants, language: Language, framework: Framework) -> String {
    let pascal = &name.pascal;
    let camel = &name.camel;
    let ts = language.is_typescript();

    let types = if ts { type_definitions(pascal, true) } else { String::new() };
    let id = if ts { "id: string" } else { "id" };
    let create_data = if ts { format!("data: {pascal}CreateData") } else { "data".to_string() };
    let update_data = if ts { format!("data: {pascal}UpdateData") } else { "data".to_string() };
    let private = if ts { "private " } else { "" };
    let annotate = |text: String| if ts { text } else { String::new() };
    let ret_list = annotate(format!(": Promise<{pascal}Data[]>"));
    let ret_maybe = annotate(format!(": Promise<{pascal}Data | null>"));
    let ret_one = annotate(format!(": Promise<{pascal}Data>"));
    let ret_bool = annotate(": Promise<boolean>".to_string());
    let item_ty = annotate(format!(": {pascal}Data"));

    if framework == Framework::Node {
        let store_ty = annotate(format!(": {pascal}Data[]"));
        format!(
            r#"import {{ randomUUID }} from 'crypto';

{types}class {pascal}Service {{
  {private}items{store_ty} = [];

  async findAll(){ret_list} {{
    // Replace with a real database query
    return this.items;
  }}

  async findById({id}){ret_maybe} {{
    return this.items.find((item) => item.id === id) ?? null;
  }}

  async create({create_data}){ret_one} {{
    const item{item_ty} = {{
      id: randomUUID(),
      ...data,
      createdAt: new Date(),
      updatedAt: new Date(),
    }};
    this.items.push(item);
    return item;
  }}

  async update({id}, {update_data}){ret_maybe} {{
    const index = this.items.findIndex((item) => item.id === id);
    if (index === -1) {{
      return null;
    }}
    this.items[index] = {{ ...this.items[index], ...data, updatedAt: new Date() }};
    return this.items[index];
  }}

  async delete({id}){ret_bool} {{
    const index = this.items.findIndex((item) => item.id === id);
    if (index === -1) {{
      return false;
    }}
    this.items.splice(index, 1);
    return true;
  }}
}}

export const {camel}Service = new {pascal}Service();
export default {camel}Service;
"#
        )
    } else {
        format!(
            r#"{types}class {pascal}Service {{
  // Connection string for your data layer (Prisma, MongoDB, ...)
  {private}databaseUrl = process.env.DATABASE_URL ?? '';

  async findAll(){ret_list} {{
    // Example with Prisma: return prisma.{camel}.findMany();
    return [];
  }}

  async findById({id}){ret_maybe} {{
    // Example with Prisma: return prisma.{camel}.findUnique({{ where: {{ id }} }});
    return null;
  }}

  async create({create_data}){ret_one} {{
    // Example with Prisma: return prisma.{camel}.create({{ data }});
    const item{item_ty} = {{
      id: Math.random().toString(36).slice(2, 11),
      ...data,
      createdAt: new Date(),
      updatedAt: new Date(),
    }};
    return item;
  }}

  async update({id}, {update_data}){ret_maybe} {{
    // Example with Prisma: return prisma.{camel}.update({{ where: {{ id }}, data }});
    return null;
  }}

  async delete({id}){ret_bool} {{
    // Example with Prisma: await prisma.{camel}.delete({{ where: {{ id }} }});
    return true;
  }}
}}

export const {camel}Service = new {pascal}Service();
export default {camel}Service;
"#
        )
    }
}
