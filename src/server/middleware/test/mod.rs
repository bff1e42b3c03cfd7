mod deploy_token;
