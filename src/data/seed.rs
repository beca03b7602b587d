//! Seed content for the in-memory store and author directory.
//!
//! Three sample posts under `blog/` and their three authors. The store
//! starts from these so a fresh process has something to list.

use super::types::Author;

/// Initial documents, keyed by virtual path.
pub fn seed_documents() -> Vec<(String, String)> {
    vec![
        (
            "blog/engineering/backend/building-scalable-apis-fastapi.md".to_owned(),
            SCALABLE_APIS.to_owned(),
        ),
        (
            "blog/engineering/devops/deploying-github-actions.md".to_owned(),
            GITHUB_ACTIONS.to_owned(),
        ),
        (
            "blog/ai/research/future-ai-software.md".to_owned(),
            FUTURE_AI.to_owned(),
        ),
    ]
}

/// Initial author profiles.
pub fn seed_authors() -> Vec<Author> {
    vec![
        Author {
            name: "Alex Dev".to_owned(),
            role: "Senior Python Engineer".to_owned(),
            bio: "Alex loves building scalable backend systems and exploring new algorithms. \
                  When not coding, he is hiking."
                .to_owned(),
            avatar: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&q=80".to_owned(),
        },
        Author {
            name: "Sarah Ops".to_owned(),
            role: "DevOps Specialist".to_owned(),
            bio: "Sarah is passionate about automation, CI/CD pipelines, and cloud \
                  infrastructure. She ensures code ships smoothly."
                .to_owned(),
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&q=80".to_owned(),
        },
        Author {
            name: "Jordan Lee".to_owned(),
            role: "AI Researcher".to_owned(),
            bio: "Jordan focuses on the intersection of generative AI and software \
                  engineering, pushing the boundaries of what tools can do."
                .to_owned(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&q=80".to_owned(),
        },
    ]
}

const SCALABLE_APIS: &str = r#"---
id: 1
title: Building Scalable APIs with Python FastAPI
slug: building-scalable-apis-fastapi
author: Alex Dev
publishedAt: 2023-10-15
tags: [Python, FastAPI, Backend]
coverImage: https://picsum.photos/800/400?random=1
excerpt: Explore why FastAPI is becoming the go-to framework for high-performance Python web services and how to leverage its async capabilities.
---

# Building Scalable APIs with Python FastAPI

FastAPI has taken the Python world by storm. It offers high performance, easy-to-learn syntax, and automatic interactive documentation.

## Why FastAPI?

1. **Speed**: It's on par with NodeJS and Go.
2. **Type Safety**: Leverages Python 3.6+ type hints.
3. **Async Support**: Built on Starlette and Pydantic.

## Code Example

```python
from fastapi import FastAPI

app = FastAPI()

@app.get("/")
def read_root():
    return {"Hello": "World"}
```

## Conclusion

If you are building data-intensive applications or ML wrappers, FastAPI is the way to go."#;

const GITHUB_ACTIONS: &str = r#"---
id: 2
title: Deploying to the Cloud with GitHub Actions
slug: deploying-github-actions
author: Sarah Ops
publishedAt: 2023-10-20
tags: [DevOps, CI/CD, GitHub]
coverImage: https://picsum.photos/800/400?random=2
excerpt: A step-by-step guide to automating your deployment pipeline using GitHub Actions CI/CD workflows.
---

# Deploying to the Cloud with GitHub Actions

Automation is key to modern DevOps. GitHub Actions allows you to build, test, and deploy your code right from GitHub.

## The Workflow File

Create a `.yml` file in `.github/workflows/`:

```yaml
name: CI/CD

on: [push]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v2
    - name: Run Scripts
      run: echo "Deploying..."
```

This simple configuration can save hours of manual work."#;

const FUTURE_AI: &str = r#"---
id: 3
title: The Future of AI in Software Development
slug: future-ai-software
author: Jordan Lee
publishedAt: 2023-10-28
tags: [AI, Gemini, Future]
coverImage: https://picsum.photos/800/400?random=3
excerpt: How LLMs like Gemini are transforming the way we write, debug, and optimize code.
---

# The Future of AI in Software Development

Artificial Intelligence is no longer just a buzzword; it's a daily tool for developers.

## Key Areas of Impact

- **Code Generation**: Boilerplate is a thing of the past.
- **Debugging**: AI can spot race conditions humans miss.
- **Documentation**: Automated docs are becoming standard.

## Leveraging Gemini

Using the Gemini API, developers can integrate reasoning capabilities directly into their apps."#;
