//! Express backend templates.
//!
//! Every template is a plain string with `{{Key}}` placeholders filled by
//! [`super::render`] from [`NameVariants::vars`](crate::commands::naming::NameVariants::vars).
//! Import paths match the file names written by the backend generator:
//! `<kebab>.<kind>.<ext>` under `src/<kind dir>/`.

use super::Language;
use crate::commands::backend::{BackendKind, MiddlewareKind};

/// Template source for a backend artifact.
pub fn template(kind: BackendKind, language: Language, middleware: MiddlewareKind) -> &'static str {
    use BackendKind::*;
    match (kind, language) {
        (Controller, Language::TypeScript) => CONTROLLER_TS,
        (Controller, Language::JavaScript) => CONTROLLER_JS,
        (Service, Language::TypeScript) => SERVICE_TS,
        (Service, Language::JavaScript) => SERVICE_JS,
        (Model, Language::TypeScript) => MODEL_TS,
        (Model, Language::JavaScript) => MODEL_JS,
        (Dto, Language::TypeScript) => DTO_TS,
        (Dto, Language::JavaScript) => DTO_JS,
        (Route, Language::TypeScript) => ROUTE_TS,
        (Route, Language::JavaScript) => ROUTE_JS,
        (Middleware, lang) => match (middleware, lang) {
            (MiddlewareKind::Jwt, Language::TypeScript) => JWT_MIDDLEWARE_TS,
            (MiddlewareKind::Jwt, Language::JavaScript) => JWT_MIDDLEWARE_JS,
            (MiddlewareKind::Default, Language::TypeScript) => MIDDLEWARE_TS,
            (MiddlewareKind::Default, Language::JavaScript) => MIDDLEWARE_JS,
        },
    }
}

pub const CONTROLLER_TS: &str = r#"import { Request, Response } from 'express';
import * as {{camelName}}Service from '../services/{{kebabName}}.service';

const errorMessage = (error: unknown): string =>
  error instanceof Error ? error.message : 'Unknown error';

// POST /{{pluralName}}
export const create{{PascalName}} = async (req: Request, res: Response): Promise<void> => {
  try {
    const created = await {{camelName}}Service.create(req.body);
    res.status(201).json({ success: true, data: created });
  } catch (error) {
    res.status(400).json({ success: false, message: errorMessage(error) });
  }
};

// GET /{{pluralName}}
export const get{{PascalName}}s = async (_req: Request, res: Response): Promise<void> => {
  try {
    const items = await {{camelName}}Service.findAll();
    res.status(200).json({ success: true, data: items });
  } catch (error) {
    res.status(500).json({ success: false, message: errorMessage(error) });
  }
};

// GET /{{pluralName}}/:id
export const get{{PascalName}}ById = async (req: Request, res: Response): Promise<void> => {
  try {
    const item = await {{camelName}}Service.findById(req.params.id);
    if (!item) {
      res.status(404).json({ success: false, message: '{{PascalName}} not found' });
      return;
    }
    res.status(200).json({ success: true, data: item });
  } catch (error) {
    res.status(500).json({ success: false, message: errorMessage(error) });
  }
};

// PUT /{{pluralName}}/:id
export const update{{PascalName}} = async (req: Request, res: Response): Promise<void> => {
  try {
    const item = await {{camelName}}Service.update(req.params.id, req.body);
    if (!item) {
      res.status(404).json({ success: false, message: '{{PascalName}} not found' });
      return;
    }
    res.status(200).json({ success: true, data: item });
  } catch (error) {
    res.status(400).json({ success: false, message: errorMessage(error) });
  }
};

// DELETE /{{pluralName}}/:id
export const delete{{PascalName}} = async (req: Request, res: Response): Promise<void> => {
  try {
    const item = await {{camelName}}Service.remove(req.params.id);
    if (!item) {
      res.status(404).json({ success: false, message: '{{PascalName}} not found' });
      return;
    }
    res.status(200).json({ success: true, message: '{{PascalName}} deleted successfully' });
  } catch (error) {
    res.status(500).json({ success: false, message: errorMessage(error) });
  }
};
"#;

pub const CONTROLLER_JS: &str = r#"import * as {{camelName}}Service from '../services/{{kebabName}}.service.js';

// POST /{{pluralName}}
export const create{{PascalName}} = async (req, res) => {
  try {
    const created = await {{camelName}}Service.create(req.body);
    res.status(201).json({ success: true, data: created });
  } catch (error) {
    res.status(400).json({ success: false, message: error.message });
  }
};

// GET /{{pluralName}}
export const get{{PascalName}}s = async (_req, res) => {
  try {
    const items = await {{camelName}}Service.findAll();
    res.status(200).json({ success: true, data: items });
  } catch (error) {
    res.status(500).json({ success: false, message: error.message });
  }
};

// GET /{{pluralName}}/:id
export const get{{PascalName}}ById = async (req, res) => {
  try {
    const item = await {{camelName}}Service.findById(req.params.id);
    if (!item) {
      return res.status(404).json({ success: false, message: '{{PascalName}} not found' });
    }
    res.status(200).json({ success: true, data: item });
  } catch (error) {
    res.status(500).json({ success: false, message: error.message });
  }
};

// PUT /{{pluralName}}/:id
export const update{{PascalName}} = async (req, res) => {
  try {
    const item = await {{camelName}}Service.update(req.params.id, req.body);
    if (!item) {
      return res.status(404).json({ success: false, message: '{{PascalName}} not found' });
    }
    res.status(200).json({ success: true, data: item });
  } catch (error) {
    res.status(400).json({ success: false, message: error.message });
  }
};

// DELETE /{{pluralName}}/:id
export const delete{{PascalName}} = async (req, res) => {
  try {
    const item = await {{camelName}}Service.remove(req.params.id);
    if (!item) {
      return res.status(404).json({ success: false, message: '{{PascalName}} not found' });
    }
    res.status(200).json({ success: true, message: '{{PascalName}} deleted successfully' });
  } catch (error) {
    res.status(500).json({ success: false, message: error.message });
  }
};
"#;

pub const SERVICE_TS: &str = r#"import { {{PascalName}}, I{{PascalName}} } from '../models/{{kebabName}}.model';
import { Create{{PascalName}}DTO, Update{{PascalName}}DTO } from '../dto/{{kebabName}}.dto';

export const findAll = async (): Promise<I{{PascalName}}[]> => {
  return {{PascalName}}.find({}).exec();
};

export const findById = async (id: string): Promise<I{{PascalName}} | null> => {
  return {{PascalName}}.findById(id).exec();
};

export const create = async (data: Create{{PascalName}}DTO): Promise<I{{PascalName}}> => {
  const {{camelName}} = new {{PascalName}}(data);
  return {{camelName}}.save();
};

export const update = async (
  id: string,
  data: Update{{PascalName}}DTO
): Promise<I{{PascalName}} | null> => {
  return {{PascalName}}.findByIdAndUpdate(id, data, { new: true, runValidators: true }).exec();
};

export const remove = async (id: string): Promise<I{{PascalName}} | null> => {
  return {{PascalName}}.findByIdAndDelete(id).exec();
};

export const findWithPagination = async (
  page = 1,
  limit = 10,
  sort = '-createdAt'
): Promise<{ data: I{{PascalName}}[]; total: number; page: number; totalPages: number }> => {
  const skip = (page - 1) * limit;
  const [data, total] = await Promise.all([
    {{PascalName}}.find({}).sort(sort).skip(skip).limit(limit).exec(),
    {{PascalName}}.countDocuments(),
  ]);
  return { data, total, page, totalPages: Math.ceil(total / limit) };
};
"#;

pub const SERVICE_JS: &str = r#"import {{PascalName}} from '../models/{{kebabName}}.model.js';

export const findAll = async () => {
  return {{PascalName}}.find({});
};

export const findById = async (id) => {
  return {{PascalName}}.findById(id);
};

export const create = async (data) => {
  const {{camelName}} = new {{PascalName}}(data);
  return {{camelName}}.save();
};

export const update = async (id, data) => {
  return {{PascalName}}.findByIdAndUpdate(id, data, { new: true, runValidators: true });
};

export const remove = async (id) => {
  return {{PascalName}}.findByIdAndDelete(id);
};
"#;

pub const MODEL_TS: &str = r#"import { Schema, Document, model } from 'mongoose';

export interface I{{PascalName}} extends Document {
  name: string;
  description?: string;
  status: 'active' | 'inactive';
  createdAt: Date;
  updatedAt: Date;
  isActive: boolean;
}

const {{camelName}}Schema = new Schema<I{{PascalName}}>(
  {
    name: {
      type: String,
      required: [true, 'Name is required'],
      trim: true,
      unique: true,
    },
    description: {
      type: String,
      trim: true,
    },
    status: {
      type: String,
      enum: ['active', 'inactive'],
      default: 'active',
    },
  },
  {
    timestamps: true,
    toJSON: { virtuals: true },
  }
);

{{camelName}}Schema.index({ status: 1 });
{{camelName}}Schema.index({ createdAt: -1 });

{{camelName}}Schema.virtual('isActive').get(function () {
  return this.status === 'active';
});

export const {{PascalName}} = model<I{{PascalName}}>('{{PascalName}}', {{camelName}}Schema);
export default {{PascalName}};
"#;

pub const MODEL_JS: &str = r#"import mongoose from 'mongoose';

const {{camelName}}Schema = new mongoose.Schema(
  {
    name: {
      type: String,
      required: [true, 'Name is required'],
      trim: true,
    },
    description: {
      type: String,
      trim: true,
    },
    status: {
      type: String,
      enum: ['active', 'inactive'],
      default: 'active',
    },
  },
  {
    timestamps: true,
    toJSON: { virtuals: true },
  }
);

{{camelName}}Schema.index({ status: 1 });

{{camelName}}Schema.virtual('isActive').get(function () {
  return this.status === 'active';
});

const {{PascalName}} = mongoose.model('{{PascalName}}', {{camelName}}Schema);

export default {{PascalName}};
"#;

pub const DTO_TS: &str = r#"import { IsString, IsOptional, IsEnum, IsNotEmpty, MaxLength, MinLength } from 'class-validator';

export class Create{{PascalName}}DTO {
  @IsNotEmpty({ message: 'Name is required' })
  @IsString()
  @MinLength(3)
  @MaxLength(50)
  name!: string;

  @IsOptional()
  @IsString()
  @MaxLength(500)
  description?: string;

  @IsOptional()
  @IsEnum(['active', 'inactive'])
  status?: 'active' | 'inactive' = 'active';
}

export class Update{{PascalName}}DTO {
  @IsOptional()
  @IsString()
  @MinLength(3)
  @MaxLength(50)
  name?: string;

  @IsOptional()
  @IsString()
  @MaxLength(500)
  description?: string;

  @IsOptional()
  @IsEnum(['active', 'inactive'])
  status?: 'active' | 'inactive';
}

export interface Query{{PascalName}}DTO {
  page?: number;
  limit?: number;
  sortBy?: 'name' | 'createdAt' | 'updatedAt';
  sortOrder?: 'asc' | 'desc';
  search?: string;
  status?: 'active' | 'inactive';
}
"#;

pub const DTO_JS: &str = r#"import Joi from 'joi';

export const create{{PascalName}}DTO = Joi.object({
  name: Joi.string().min(3).max(50).required(),
  description: Joi.string().max(500).optional().allow(''),
  status: Joi.string().valid('active', 'inactive').default('active'),
});

export const update{{PascalName}}DTO = Joi.object({
  name: Joi.string().min(3).max(50).optional(),
  description: Joi.string().max(500).optional().allow(''),
  status: Joi.string().valid('active', 'inactive').optional(),
})
  .min(1)
  .messages({ 'object.min': 'At least one field must be provided for update' });

export const query{{PascalName}}DTO = Joi.object({
  page: Joi.number().integer().min(1).default(1),
  limit: Joi.number().integer().min(1).max(100).default(10),
  sortBy: Joi.string().valid('name', 'createdAt', 'updatedAt').default('createdAt'),
  sortOrder: Joi.string().valid('asc', 'desc').default('desc'),
  search: Joi.string().optional().allow(''),
  status: Joi.string().valid('active', 'inactive').optional(),
});
"#;

pub const ROUTE_TS: &str = r#"import { Router } from 'express';
import {
  create{{PascalName}},
  get{{PascalName}}s,
  get{{PascalName}}ById,
  update{{PascalName}},
  delete{{PascalName}},
} from '../controllers/{{kebabName}}.controller';

const {{camelName}}Router: Router = Router();

// POST /{{kebabName}} - Create new {{lowerName}}
{{camelName}}Router.post('/', create{{PascalName}});

// GET /{{kebabName}} - Get all {{lowerName}} records
{{camelName}}Router.get('/', get{{PascalName}}s);

// GET /{{kebabName}}/:id - Get {{lowerName}} by ID
{{camelName}}Router.get('/:id', get{{PascalName}}ById);

// PUT /{{kebabName}}/:id - Update {{lowerName}}
{{camelName}}Router.put('/:id', update{{PascalName}});

// DELETE /{{kebabName}}/:id - Delete {{lowerName}}
{{camelName}}Router.delete('/:id', delete{{PascalName}});

export default {{camelName}}Router;
"#;

pub const ROUTE_JS: &str = r#"import { Router } from 'express';
import {
  create{{PascalName}},
  get{{PascalName}}s,
  get{{PascalName}}ById,
  update{{PascalName}},
  delete{{PascalName}},
} from '../controllers/{{kebabName}}.controller.js';

const {{camelName}}Router = Router();

// POST /{{kebabName}} - Create new {{lowerName}}
{{camelName}}Router.post('/', create{{PascalName}});

// GET /{{kebabName}} - Get all {{lowerName}} records
{{camelName}}Router.get('/', get{{PascalName}}s);

// GET /{{kebabName}}/:id - Get {{lowerName}} by ID
{{camelName}}Router.get('/:id', get{{PascalName}}ById);

// PUT /{{kebabName}}/:id - Update {{lowerName}}
{{camelName}}Router.put('/:id', update{{PascalName}});

// DELETE /{{kebabName}}/:id - Delete {{lowerName}}
{{camelName}}Router.delete('/:id', delete{{PascalName}});

export default {{camelName}}Router;
"#;

pub const MIDDLEWARE_TS: &str = r#"import { Request, Response, NextFunction } from 'express';

interface {{PascalName}}Options {
  logLevel?: 'debug' | 'info' | 'warn' | 'error';
  skipRoutes?: string[];
}

export const {{camelName}}Middleware = (options: {{PascalName}}Options = {}) => {
  const { logLevel = 'info', skipRoutes = [] } = options;

  return (req: Request, res: Response, next: NextFunction): void => {
    if (skipRoutes.includes(req.path)) {
      return next();
    }

    if (logLevel === 'debug' || logLevel === 'info') {
      console.log(`[{{PascalName}}] ${req.method} ${req.path}`);
    }

    res.setHeader('X-{{PascalName}}-Processed', 'true');

    const startTime = Date.now();
    res.on('finish', () => {
      if (logLevel === 'debug') {
        console.log(`[{{PascalName}}] completed in ${Date.now() - startTime}ms`);
      }
    });

    next();
  };
};

export default {{camelName}}Middleware;
"#;

pub const MIDDLEWARE_JS: &str = r#"export const {{camelName}}Middleware = (options = {}) => {
  const { skipRoutes = [] } = options;

  return (req, res, next) => {
    if (skipRoutes.includes(req.path)) {
      return next();
    }

    console.log(`[{{PascalName}}] ${req.method} ${req.path}`);
    res.setHeader('X-{{PascalName}}-Processed', 'true');

    next();
  };
};

export default {{camelName}}Middleware;
"#;

pub const JWT_MIDDLEWARE_TS: &str = r#"import { Request, Response, NextFunction } from 'express';
import jwt, { JwtPayload } from 'jsonwebtoken';

export interface {{PascalName}}Request extends Request {
  user?: string | JwtPayload;
}

const secret = (): string => process.env.JWT_SECRET || 'your-secret-key';

export const {{camelName}}Middleware = (
  req: {{PascalName}}Request,
  res: Response,
  next: NextFunction
): void => {
  const header = req.headers.authorization;
  if (!header) {
    res.status(401).json({ success: false, message: 'No token provided' });
    return;
  }

  const [scheme, token] = header.split(' ');
  if (scheme !== 'Bearer' || !token) {
    res.status(401).json({ success: false, message: 'Invalid token format' });
    return;
  }

  try {
    req.user = jwt.verify(token, secret(), { algorithms: ['HS256'] });
    next();
  } catch (error) {
    const message =
      error instanceof jwt.TokenExpiredError ? 'Token expired' : 'Invalid token';
    res.status(401).json({ success: false, message });
  }
};

export const generateToken = (payload: object, expiresIn = '24h'): string =>
  jwt.sign(payload, secret(), { expiresIn } as jwt.SignOptions);

export default {{camelName}}Middleware;
"#;

pub const JWT_MIDDLEWARE_JS: &str = r#"import jwt from 'jsonwebtoken';

const secret = () => process.env.JWT_SECRET || 'your-secret-key';

export const {{camelName}}Middleware = (req, res, next) => {
  const header = req.headers.authorization;
  if (!header) {
    return res.status(401).json({ success: false, message: 'No token provided' });
  }

  const [scheme, token] = header.split(' ');
  if (scheme !== 'Bearer' || !token) {
    return res.status(401).json({ success: false, message: 'Invalid token format' });
  }

  try {
    req.user = jwt.verify(token, secret(), { algorithms: ['HS256'] });
    next();
  } catch (error) {
    const message = error instanceof jwt.TokenExpiredError ? 'Token expired' : 'Invalid token';
    res.status(401).json({ success: false, message });
  }
};

export const generateToken = (payload, expiresIn = '24h') =>
  jwt.sign(payload, secret(), { expiresIn });

export default {{camelName}}Middleware;
"#;
