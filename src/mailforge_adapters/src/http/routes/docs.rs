use axum::Json;
use serde_json::{Value, json};

/// OpenAPI 3.0 description of the `/api` routes, served at `/swagger.json`.
pub async fn swagger_json() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Mailforge API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Verified disposable mailboxes on top of Mail.tm and Disify"
        },
        "tags": [
            { "name": "Email", "description": "Disposable mailbox creation" },
            { "name": "Messages", "description": "Messages received by a mailbox" },
            { "name": "Account", "description": "The mailbox account itself" }
        ],
        "paths": {
            "/api/email": {
                "post": {
                    "summary": "Create a verified disposable mailbox",
                    "tags": ["Email"],
                    "responses": {
                        "201": json_response("Mailbox created", schema_ref("CreateEmailResponse")),
                        "500": error_response("No mailbox could be created"),
                        "503": error_response("The provider has no domains available")
                    }
                }
            },
            "/api/messages": {
                "get": {
                    "summary": "List the mailbox's messages",
                    "tags": ["Messages"],
                    "parameters": [
                        token_parameter(),
                        {
                            "in": "query",
                            "name": "page",
                            "required": false,
                            "schema": { "type": "integer", "minimum": 1, "default": 1 }
                        }
                    ],
                    "responses": {
                        "200": json_response("Message page", data_envelope("MessageList")),
                        "400": error_response("Missing token or invalid page"),
                        "401": error_response("Token rejected by the provider"),
                        "500": error_response("Provider failure")
                    }
                }
            },
            "/api/messages/{id}": {
                "get": {
                    "summary": "Fetch a message and mark it as read",
                    "tags": ["Messages"],
                    "parameters": [id_parameter(), token_parameter()],
                    "responses": {
                        "200": json_response("The message", data_envelope("Message")),
                        "400": error_response("Missing token"),
                        "401": error_response("Token rejected by the provider"),
                        "404": error_response("Unknown message"),
                        "500": error_response("Provider failure")
                    }
                },
                "delete": {
                    "summary": "Delete a message",
                    "tags": ["Messages"],
                    "parameters": [id_parameter(), token_parameter()],
                    "responses": {
                        "204": { "description": "Message deleted" },
                        "400": error_response("Missing token"),
                        "401": error_response("Token rejected by the provider"),
                        "404": error_response("Unknown message"),
                        "500": error_response("Provider failure")
                    }
                }
            },
            "/api/account": {
                "get": {
                    "summary": "Fetch the mailbox account",
                    "tags": ["Account"],
                    "parameters": [token_parameter()],
                    "responses": account_responses()
                },
                "delete": {
                    "summary": "Delete the mailbox account",
                    "tags": ["Account"],
                    "parameters": [token_parameter()],
                    "responses": {
                        "204": { "description": "Account deleted" },
                        "400": error_response("Missing token"),
                        "401": error_response("Token rejected by the provider"),
                        "500": error_response("Provider failure")
                    }
                }
            },
            "/api/account/me": {
                "get": {
                    "summary": "Fetch the account the token belongs to",
                    "tags": ["Account"],
                    "parameters": [token_parameter()],
                    "responses": account_responses()
                }
            }
        },
        "components": { "schemas": schemas() }
    })
}

fn schemas() -> Value {
    let date_time = json!({ "type": "string", "format": "date-time" });

    json!({
        "VerifiedEmail": {
            "type": "object",
            "required": ["email", "password", "token", "isVerified"],
            "properties": {
                "email": { "type": "string", "example": "x7k2p9q1zz@mailto.plus" },
                "password": { "type": "string" },
                "token": { "type": "string", "description": "Bearer token for the mailbox routes" },
                "isVerified": { "type": "boolean" }
            }
        },
        "UserProfile": {
            "type": "object",
            "properties": {
                "firstName": { "type": "string" },
                "lastName": { "type": "string" },
                "fullName": { "type": "string" },
                "gender": { "type": "string", "enum": ["male", "female"] },
                "age": { "type": "integer" },
                "birthdate": { "type": "string", "format": "date" },
                "avatar": { "type": "string" },
                "address": {
                    "type": "object",
                    "properties": {
                        "street": { "type": "string" },
                        "city": { "type": "string" },
                        "state": { "type": "string" },
                        "zipCode": { "type": "string" },
                        "country": { "type": "string" }
                    }
                },
                "phone": { "type": "string" },
                "occupation": { "type": "string" },
                "company": { "type": "string" }
            }
        },
        "Domain": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "domain": { "type": "string" },
                "isActive": { "type": "boolean" },
                "isPrivate": { "type": "boolean" },
                "createdAt": date_time,
                "updatedAt": date_time
            }
        },
        "CreateEmailResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "disposableDetected": {
                    "type": "boolean",
                    "description": "The address did not pass the validity check"
                },
                "data": schema_ref("VerifiedEmail"),
                "userProfile": schema_ref("UserProfile"),
                "domains": { "type": "array", "items": schema_ref("Domain") },
                "attempts": { "type": "integer", "minimum": 1 }
            }
        },
        "Account": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "address": { "type": "string" },
                "quota": { "type": "integer" },
                "used": { "type": "integer" },
                "isDisabled": { "type": "boolean" },
                "isDeleted": { "type": "boolean" },
                "createdAt": date_time,
                "updatedAt": date_time
            }
        },
        "Correspondent": {
            "type": "object",
            "properties": {
                "address": { "type": "string" },
                "name": { "type": "string" }
            }
        },
        "Attachment": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "filename": { "type": "string" },
                "contentType": { "type": "string" },
                "disposition": { "type": "string" },
                "transferEncoding": { "type": "string" },
                "related": { "type": "boolean" },
                "size": { "type": "integer" },
                "downloadUrl": { "type": "string" }
            }
        },
        "Message": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "accountId": { "type": "string" },
                "msgid": { "type": "string" },
                "from": schema_ref("Correspondent"),
                "to": { "type": "array", "items": schema_ref("Correspondent") },
                "subject": { "type": "string" },
                "intro": { "type": "string" },
                "text": { "type": "string" },
                "html": { "type": "array", "items": { "type": "string" } },
                "seen": { "type": "boolean" },
                "isDeleted": { "type": "boolean" },
                "hasAttachments": { "type": "boolean" },
                "attachments": { "type": "array", "items": schema_ref("Attachment") },
                "size": { "type": "integer" },
                "downloadUrl": { "type": "string" },
                "createdAt": date_time,
                "updatedAt": date_time
            }
        },
        "MessageList": {
            "type": "object",
            "properties": {
                "hydra:member": { "type": "array", "items": schema_ref("Message") },
                "hydra:totalItems": { "type": "integer" }
            }
        },
        "Error": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": false },
                "error": {
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "type": "string" },
                        "stack": {
                            "type": "string",
                            "description": "Error source chain, only when error details are exposed"
                        }
                    }
                }
            }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn data_envelope(name: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean", "example": true },
            "data": schema_ref(name)
        }
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn error_response(description: &str) -> Value {
    json_response(description, schema_ref("Error"))
}

fn account_responses() -> Value {
    json!({
        "200": json_response("The account", data_envelope("Account")),
        "400": error_response("Missing token"),
        "401": error_response("Token rejected by the provider"),
        "500": error_response("Provider failure")
    })
}

fn token_parameter() -> Value {
    json!({
        "in": "query",
        "name": "token",
        "required": true,
        "schema": { "type": "string" }
    })
}

fn id_parameter() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "string" }
    })
}
