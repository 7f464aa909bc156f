// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned reply texts.
//!
//! Front-end copy depends on these blocks verbatim, including the markdown
//! bold markers and blank lines.

/// Career/mentor: "resume" or "cv".
pub const RESUME_ADVICE: &str = r#"Great question! For your resume, I'd recommend:

1. **Quantify achievements**: Use numbers and metrics to show impact
2. **Tailor for the role**: Customize your resume for each application
3. **Highlight relevant skills**: Match keywords from job descriptions
4. **Keep it concise**: Aim for 1-2 pages maximum
5. **Use action verbs**: Start bullet points with strong verbs like "Led", "Built", "Optimized"

Would you like specific feedback on your resume or help tailoring it for a particular role?"#;

/// Career/mentor: "placement" or "interview".
pub const INTERVIEW_PREP: &str = "For placement preparation, focus on:

1. **Technical Skills**: Practice coding problems on platforms like LeetCode, HackerRank
2. **System Design**: Understand scalability, databases, and architecture patterns
3. **Behavioral Questions**: Prepare STAR method stories for common questions
4. **Mock Interviews**: Practice with peers or use platforms like Pramp
5. **Portfolio Projects**: Be ready to explain your projects in detail

I can help you prepare for specific companies or roles. What would you like to focus on?";

/// Career/mentor: "project" or "placementprep".
pub const PROJECT_OVERVIEW: &str = "The PlacementPrep project is a comprehensive platform designed to help students prepare for technical interviews. It includes:

- **Practice Problems**: Curated coding challenges
- **Mock Interviews**: Simulated interview experiences
- **Progress Tracking**: Monitor your preparation journey
- **Resource Library**: Study materials and tips

Built with modern technologies like React, Node.js, and MongoDB. Would you like to know more about the technical implementation or specific features?";

/// Career/mentor: "leadership" or "team".
pub const LEADERSHIP: &str = "Leadership experience is crucial for career growth. Key aspects include:

1. **Communication**: Clear, effective communication with team members
2. **Decision Making**: Making informed decisions under pressure
3. **Mentorship**: Guiding and supporting junior developers
4. **Project Management**: Organizing tasks and timelines
5. **Conflict Resolution**: Handling disagreements constructively

I can help you articulate your leadership experiences for interviews or resumes. What specific leadership scenario would you like to discuss?";

/// Developer: "tech stack" or "technology".
pub const TECH_STACK: &str = "My tech stack includes:

**Frontend**: React, Next.js, TypeScript, Tailwind CSS
**Backend**: Node.js, Express, Python, Flask
**Databases**: MongoDB, PostgreSQL, Redis
**AI/ML**: TensorFlow, PyTorch, OpenAI API
**DevOps**: Docker, AWS, CI/CD pipelines
**Tools**: Git, VS Code, Postman

I'm always learning and exploring new technologies. What specific technology would you like to know more about?";

/// Developer: "ai" or "machine learning".
pub const AI_EXPERIENCE: &str = "I have experience with AI/ML including:

- **NLP**: Natural Language Processing for chatbots and text analysis
- **Computer Vision**: Image recognition and processing
- **Deep Learning**: Neural networks with TensorFlow and PyTorch
- **LLM Integration**: Working with OpenAI, Anthropic APIs
- **MLOps**: Deploying and managing ML models in production

I've built several AI-powered applications including this AI assistant! What aspect of AI interests you?";

/// Developer: "system design" or "architecture".
pub const SYSTEM_DESIGN: &str = "For system design, I focus on:

1. **Scalability**: Horizontal vs vertical scaling, load balancing
2. **Database Design**: SQL vs NoSQL, indexing, replication
3. **Caching**: Redis, CDN, in-memory caching strategies
4. **API Design**: RESTful principles, GraphQL, rate limiting
5. **Security**: Authentication, authorization, encryption
6. **Monitoring**: Logging, metrics, alerting systems

Would you like to discuss a specific system design problem or architecture pattern?";

/// Designer: "ui", "ux", or "design".
pub const DESIGN_APPROACH: &str = "My design approach focuses on:

1. **User-Centered Design**: Understanding user needs and pain points
2. **Accessibility**: WCAG guidelines, keyboard navigation, screen readers
3. **Visual Hierarchy**: Clear information architecture and typography
4. **Responsive Design**: Mobile-first approach, breakpoints
5. **Design Systems**: Consistent components and patterns
6. **Prototyping**: Figma, user flows, wireframes

I believe good design is invisible - users shouldn't have to think about how to use an interface. What design challenge are you working on?";

/// Returned when no rule in the active persona matches.
pub const FALLBACK: &str = "Thanks for your question! I'm here to help with:

- Career advice and resume feedback
- Technical questions about projects and technologies
- System design and architecture discussions
- Interview preparation tips
- Portfolio and project explanations

Could you be more specific about what you'd like to know? I can provide detailed guidance based on your needs.";
